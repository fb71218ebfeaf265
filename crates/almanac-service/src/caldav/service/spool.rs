//! Raw calendar rendering of a collection for GET/HEAD.

use almanac_rfc::rfc::dav::core::Href;
use almanac_rfc::rfc::ical::CalendarDocument;

use super::assemble::assemble_calendar;
use super::freebusy::redact_for_context;
use crate::error::{ServiceError, ServiceResult};
use crate::model::AccessContext;
use crate::store::CalendarStore;

/// ## Summary
/// Produces the document served for a raw-calendar rendering of `href`.
///
/// The collection's events are assembled and then redacted if the request's
/// ticket is a free/busy ticket registered on the collection.
///
/// ## Errors
/// `NotFound` if no collection exists at `href`. `IncompatibleResourceType`
/// if it is not a calendar collection, which means the caller selected the
/// raw rendering for the wrong resource. Redaction failures propagate.
pub fn render_calendar(
    store: &dyn CalendarStore,
    href: &Href,
    ctx: &AccessContext,
    prodid: &str,
) -> ServiceResult<CalendarDocument> {
    let collection = store
        .collection(href)
        .ok_or_else(|| ServiceError::NotFound(href.to_string()))?;

    if !collection.is_calendar_collection() {
        tracing::error!(
            href = %href,
            kind = %collection.kind,
            "Raw calendar rendering requested for a non-calendar collection"
        );
        return Err(ServiceError::IncompatibleResourceType(href.to_string()));
    }

    let doc = assemble_calendar(&collection, prodid);
    redact_for_context(doc, &store.tickets_of(href), ctx)
}
