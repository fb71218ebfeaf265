//! Helper functions for GET and HEAD request processing.

use almanac_core::constants::CALENDAR_CONTENT_TYPE;
use almanac_rfc::rfc::dav::core::Href;
use almanac_rfc::rfc::ical;
use almanac_service::caldav::negotiate::RenderMode;
use almanac_service::caldav::service::spool::render_calendar;
use almanac_service::model::{Collection, ItemKind};
use quick_xml::escape::escape;
use salvo::http::header::{CONTENT_TYPE, ETAG};
use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response};
use sha2::{Digest, Sha256};

use crate::app::api::dav::extract::accept::render_mode;
use crate::app::api::dav::extract::access::access_context;
use crate::app::api::dav::response::error::write_service_error;
use crate::config::get_config_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Shared implementation for GET and HEAD handlers.
///
/// ## Parameters
/// - `is_head`: If true, response body is omitted (HEAD request); if false, includes body (GET request)
///
/// ## Side Effects
/// - Sets HTTP status code and headers on response
/// - For GET requests, writes response body
pub(super) fn handle_get_or_head(req: &Request, res: &mut Response, is_head: bool, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get calendar store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let href = Href::new(req.uri().path());
    let Some(collection) = store.collection(&href) else {
        tracing::debug!(href = %href, "No collection at path");
        res.status_code(StatusCode::NOT_FOUND);
        return;
    };

    let mode = render_mode(req);
    tracing::debug!(href = %href, kind = %collection.kind, mode = ?mode, "Rendering collection");

    if mode == RenderMode::RawCalendar && collection.is_calendar_collection() {
        let settings = match get_config_from_depot(depot) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Failed to get configuration");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                return;
            }
        };

        let ctx = access_context(req, store.as_ref());
        match render_calendar(store.as_ref(), &href, &ctx, &settings.calendar.prodid) {
            Ok(doc) => write_entity(res, CALENDAR_CONTENT_TYPE, ical::serialize(&doc), is_head),
            Err(e) => write_service_error(res, &e),
        }
    } else {
        let listing = render_listing(&collection, &store.children_of(&href));
        write_entity(res, "text/html; charset=utf-8", listing, is_head);
    }
}

/// ## Summary
/// Returns the strong `ETag` of a rendered body.
#[must_use]
pub(super) fn compute_etag(body: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

/// ## Summary
/// Sets response headers and body for a successful GET/HEAD request.
///
/// ## Side Effects
/// Sets `ETag` and `Content-Type` headers and response body (for GET).
fn write_entity(res: &mut Response, content_type: &'static str, body: String, is_head: bool) {
    if let Ok(etag_value) = HeaderValue::from_str(&compute_etag(body.as_bytes())) {
        res.headers_mut().insert(ETAG, etag_value);
    }
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

    res.status_code(StatusCode::OK);

    // Set body only for GET (not HEAD)
    if !is_head && let Err(e) = res.write_body(body) {
        tracing::error!("Failed to write response body: {}", e);
    }
}

/// ## Summary
/// Renders the generic HTML view of a collection.
///
/// Lists the collection kind, whether it is excluded from free/busy rollups,
/// its child collections and its items.
#[must_use]
pub(super) fn render_listing(collection: &Collection, child_collections: &[Href]) -> String {
    let title = escape(collection.title());
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n"
    );

    html.push_str("<dl>\n");
    html.push_str(&format!("<dt>Kind</dt><dd>{}</dd>\n", collection.kind));
    if let Some(description) = &collection.description {
        html.push_str(&format!("<dt>Description</dt><dd>{}</dd>\n", escape(description)));
    }
    let excluded = if collection.exclude_free_busy_rollup { "yes" } else { "no" };
    html.push_str(&format!(
        "<dt>Excluded from free/busy rollups</dt><dd>{excluded}</dd>\n"
    ));
    html.push_str("</dl>\n");

    if !child_collections.is_empty() {
        html.push_str("<h2>Collections</h2>\n<ul>\n");
        for child in child_collections {
            let href = escape(child.as_str());
            let name = escape(child.name().unwrap_or_default());
            html.push_str(&format!("<li><a href=\"{href}/\">{name}</a></li>\n"));
        }
        html.push_str("</ul>\n");
    }

    if !collection.children.is_empty() {
        html.push_str("<h2>Items</h2>\n<ul>\n");
        for item in &collection.children {
            let kind = match item.kind {
                ItemKind::Note => "note",
                ItemKind::File => "file",
            };
            html.push_str(&format!("<li>{} ({kind})</li>\n", escape(&item.name)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
