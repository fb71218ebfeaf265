use almanac_rfc::rfc::dav::build::serialize_multistatus;
use almanac_rfc::rfc::dav::core::Multistatus;
use salvo::Response;
use salvo::http::header::CONTENT_TYPE;
use salvo::http::{HeaderValue, StatusCode};

/// ## Summary
/// Sends a 207 Multi-Status response.
///
/// ## Side Effects
/// Sets the status, `Content-Type` and body of `res`, or 500 if the body
/// cannot be serialized.
pub fn write_multistatus(res: &mut Response, multistatus: &Multistatus) {
    let xml = match serialize_multistatus(multistatus) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize multistatus");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    res.status_code(StatusCode::MULTI_STATUS);
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/xml; charset=utf-8"),
    );
    if let Err(e) = res.write_body(xml) {
        tracing::error!(error = %e, "Failed to write multistatus body");
    }
}
