//! `WebDAV` XML types.
//!
//! This module defines the core types for the `WebDAV` elements used by
//! `MKCALENDAR` requests, multistatus responses and error bodies.

mod href;
mod multistatus;
mod namespace;
pub mod precondition;
pub mod property;

pub use href::Href;
pub use multistatus::{Multistatus, Propstat, PropstatResponse, Status};
pub use namespace::{CALDAV_NS, DAV_NS, Namespace, QName, caldav_props, dav_props};
pub use precondition::PreconditionError;
pub use property::{DavProperty, PropertyValue};
