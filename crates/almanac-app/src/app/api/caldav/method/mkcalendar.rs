//! MKCALENDAR method handler for `CalDAV` calendar collection creation.

use almanac_rfc::rfc::dav::core::{Href, Multistatus, PreconditionError};
use almanac_rfc::rfc::dav::parse::parse_mkcalendar;
use almanac_service::caldav::service::mkcalendar::{CreationOutcome, create_calendar_collection};
use salvo::http::header::{CACHE_CONTROL, LOCATION, PRAGMA};
use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, handler};

use crate::app::api::dav::response::error::{write_precondition, write_service_error};
use crate::app::api::dav::response::multistatus::write_multistatus;
use crate::app::api::dav::util::build_full_url;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Handles MKCALENDAR requests to create calendar collections.
///
/// Parses the optional MKCALENDAR XML request body with initial properties,
/// then creates the calendar collection through the store.
///
/// ## Side Effects
/// - Creates the calendar collection in the store
/// - Applies initial properties (displayname, calendar-description, dead properties)
/// - Returns 201 Created with caching disabled, or 207 Multi-Status when
///   some properties could not be set
///
/// ## Errors
/// Returns 400 for invalid XML, 403 for entity declarations or a location
/// inside a calendar collection, 409 if the target exists or its parent is
/// missing, 500 for internal failures.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn mkcalendar(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to get calendar store: {}", e);
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    // Parse optional MKCALENDAR XML body for initial properties
    let properties = match req.payload().await {
        Ok(bytes) if !bytes.is_empty() => match parse_mkcalendar(bytes) {
            Ok(request) => request.properties,
            Err(e) if e.is_forbidden_entity() => {
                tracing::debug!(error = %e, "MKCALENDAR body declares entities");
                write_precondition(res, &PreconditionError::NoExternalEntities);
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to parse MKCALENDAR body");
                res.status_code(StatusCode::BAD_REQUEST);
                return;
            }
        },
        // Empty body - no initial properties
        Ok(_) => Vec::new(),
        Err(e) => {
            tracing::error!("Failed to read request body: {}", e);
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let href = Href::new(req.uri().path());
    let location = store.locate(&href);
    tracing::debug!(
        href = %href,
        exists = location.exists,
        parent = ?location.parent,
        properties = properties.len(),
        "Resolved MKCALENDAR target"
    );

    match create_calendar_collection(store.as_ref(), &location, &properties) {
        Ok(CreationOutcome::Created) => {
            res.status_code(StatusCode::CREATED);
            res.headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
            res.headers_mut()
                .insert(PRAGMA, HeaderValue::from_static("no-cache"));

            // Set Location header with full URL (RFC 4918 §8.10.4)
            let location = build_full_url(req, depot, href.as_str());
            if let Ok(value) = HeaderValue::from_str(&location) {
                res.headers_mut().insert(LOCATION, value);
            }
        }
        Ok(CreationOutcome::MultiStatus(record)) => {
            write_multistatus(res, &Multistatus::from(record));
        }
        Err(e) => write_service_error(res, &e),
    }
}
