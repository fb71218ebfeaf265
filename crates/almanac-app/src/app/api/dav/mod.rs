// Shared WebDAV mechanics used by the CalDAV handlers.
//
// Header extraction, response builders and URL helpers.

pub mod extract;
pub mod response;
pub mod util;
