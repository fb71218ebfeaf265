//! Mapping of service failures onto HTTP responses.

use almanac_rfc::rfc::dav::core::PreconditionError;
use almanac_service::error::ServiceError;
use salvo::Response;
use salvo::http::header::CONTENT_TYPE;
use salvo::http::{HeaderValue, StatusCode};
use salvo::writing::Text;

/// ## Summary
/// Sends a precondition failure with its RFC 4918 §16 XML error body.
///
/// ## Side Effects
/// Sets the status, `Content-Type` and body of `res`.
pub fn write_precondition(res: &mut Response, precondition: &PreconditionError) {
    res.status_code(precondition.status_code());
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/xml; charset=utf-8"),
    );
    if let Err(e) = res.write_body(precondition.to_xml()) {
        tracing::error!(error = %e, "Failed to write precondition body");
    }
}

/// ## Summary
/// Sends the HTTP response for a failed calendar operation.
///
/// Creation conflicts carry a precondition body. Contract failures and
/// malformed stored data are logged and reported as 500.
pub fn write_service_error(res: &mut Response, err: &ServiceError) {
    match err {
        ServiceError::AlreadyExists(_) => {
            write_precondition(res, &PreconditionError::ResourceMustBeNull);
        }
        ServiceError::InvalidLocation(_) => {
            write_precondition(res, &PreconditionError::CalendarCollectionLocationOk);
        }
        ServiceError::MissingParent(_) => {
            res.status_code(StatusCode::CONFLICT);
            res.render(Text::Plain(err.to_string()));
        }
        ServiceError::NotFound(_) => {
            res.status_code(StatusCode::NOT_FOUND);
        }
        ServiceError::IncompatibleResourceType(_) | ServiceError::MalformedCalendarData(_) => {
            tracing::error!(error = %err, "Calendar operation failed");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
