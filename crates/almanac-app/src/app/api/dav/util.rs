use salvo::{Depot, Request};

use crate::config::get_config_from_depot;

/// ## Summary
/// Returns the request origin, preferring the `Host` header and falling back to server config.
#[must_use]
pub fn request_origin(req: &Request, depot: &Depot) -> String {
    let scheme = if req.uri().scheme_str() == Some("https") {
        "https"
    } else {
        "http"
    };

    if let Some(host) = req
        .headers()
        .get("Host")
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.is_empty())
    {
        return format!("{scheme}://{host}");
    }

    match get_config_from_depot(depot) {
        Ok(settings) => settings.server.origin(),
        Err(e) => {
            tracing::warn!(error = %e, "Configuration missing; falling back to localhost origin");
            format!("{scheme}://localhost")
        }
    }
}

/// ## Summary
/// Builds the absolute URL of `path` on this server.
#[must_use]
pub fn build_full_url(req: &Request, depot: &Depot, path: &str) -> String {
    let origin = request_origin(req, depot);
    format!("{}{}", origin.trim_end_matches('/'), path)
}
