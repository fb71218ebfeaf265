/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const DAV_ROUTE_COMPONENT: &str = "dav";
pub const DAV_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", DAV_ROUTE_COMPONENT);

pub const CALDAV_ROUTE_COMPONENT: &str = "cal";
pub const CALDAV_ROUTE_PREFIX: &str =
    const_str::concat!(DAV_ROUTE_PREFIX, "/", CALDAV_ROUTE_COMPONENT);

/// Media type of a raw calendar rendering (RFC 5545 §8.1).
pub const CALENDAR_MEDIA_TYPE: &str = "text/calendar";
pub const CALENDAR_CONTENT_TYPE: &str = const_str::concat!(CALENDAR_MEDIA_TYPE, "; charset=utf-8");

/// Request header carrying an access ticket key.
pub const TICKET_HEADER: &str = "Ticket";
/// Query parameter carrying an access ticket key.
pub const TICKET_QUERY_PARAM: &str = "ticket";
