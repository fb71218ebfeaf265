//! RFC-level building blocks: the iCalendar document model and serializer
//! (RFC 5545) and the `WebDAV`/`CalDAV` XML pieces (RFC 4918, RFC 4791) used by
//! the calendar collection handlers.

pub mod error;
pub mod rfc;
