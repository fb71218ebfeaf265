//! `WebDAV` and `CalDAV` protocol types (RFC 4918, RFC 4791).

pub mod build;
pub mod core;
pub mod parse;
