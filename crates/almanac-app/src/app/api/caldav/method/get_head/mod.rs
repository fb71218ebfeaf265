//! GET and HEAD on collections.

mod helpers;

use salvo::{Depot, Request, Response, handler};

/// ## Summary
/// Handles GET requests on collections.
///
/// A calendar collection requested with `Accept: text/calendar` is served as
/// an iCalendar document; everything else gets the HTML listing.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn get(req: &mut Request, res: &mut Response, depot: &Depot) {
    helpers::handle_get_or_head(req, res, false, depot);
}

/// ## Summary
/// Handles HEAD requests; same headers as GET, no body.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn head(req: &mut Request, res: &mut Response, depot: &Depot) {
    helpers::handle_get_or_head(req, res, true, depot);
}
