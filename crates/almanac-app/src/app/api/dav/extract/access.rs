//! Access context for the current request.

use almanac_core::constants::{TICKET_HEADER, TICKET_QUERY_PARAM};
use almanac_service::model::AccessContext;
use almanac_service::store::CalendarStore;
use chrono::Utc;
use salvo::Request;

/// ## Summary
/// Returns the ticket key presented with the request.
///
/// The `Ticket` header wins over the `ticket` query parameter. Empty values
/// count as absent.
#[must_use]
pub fn ticket_key(req: &Request) -> Option<String> {
    req.header::<String>(TICKET_HEADER)
        .or_else(|| req.query::<String>(TICKET_QUERY_PARAM))
        .filter(|key| !key.trim().is_empty())
}

/// ## Summary
/// Builds the access context for the request against `store`.
#[must_use]
pub fn access_context(req: &Request, store: &dyn CalendarStore) -> AccessContext {
    AccessContext::resolve(store, ticket_key(req).as_deref(), Utc::now())
}
