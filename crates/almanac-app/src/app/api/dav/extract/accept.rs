use almanac_service::caldav::negotiate::{RenderMode, negotiate};
use salvo::Request;
use salvo::http::header::ACCEPT;

/// ## Summary
/// Chooses the rendering for a GET/HEAD from every `Accept` header value.
#[must_use]
pub fn render_mode(req: &Request) -> RenderMode {
    negotiate(
        req.headers()
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok()),
    )
}
