//! Calendar collection services: the domain model, the store abstraction and
//! the `CalDAV` operations layered on top of it.

pub mod caldav;
pub mod error;
pub mod model;
pub mod store;
