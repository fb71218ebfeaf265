//! HTTP-level tests for the CalDAV routes.

mod get_head;
mod helpers;
mod mkcalendar;
