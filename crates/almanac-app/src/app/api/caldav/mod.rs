// CalDAV API handlers.

use salvo::{Router, http::Method, routing::MethodFilter};

use crate::app::api::CALDAV_ROUTE_COMPONENT;

pub mod method;

pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(CALDAV_ROUTE_COMPONENT).push(
        Router::with_path("{**rest}")
            .get(method::get_head::get)
            .head(method::get_head::head)
            .push(
                // MKCALENDAR method
                Router::new()
                    .filter(MethodFilter(Method::from_bytes(b"MKCALENDAR")?))
                    .goal(method::mkcalendar::mkcalendar),
            ),
    ))
}
