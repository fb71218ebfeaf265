//! `WebDAV` XML parsing.
//!
//! Request bodies are read with the `quick-xml` crate.

mod error;
mod mkcalendar;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use mkcalendar::{MkcalendarRequest, parse_mkcalendar};
