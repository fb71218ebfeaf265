//! `WebDAV` and `CalDAV` precondition codes.
//!
//! RFC 4918 §16 defines a mechanism for returning machine-readable error codes
//! via XML elements in error response bodies. Only the conditions raised by
//! calendar collection creation are modelled here.

use salvo::http::StatusCode;
use thiserror::Error;

use super::namespace::{CALDAV_NS, DAV_NS};

/// A `WebDAV`/`CalDAV` precondition error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// `DAV:resource-must-be-null` (409 Conflict)
    ///
    /// A resource must not exist at the Request-URI.
    #[error("Resource already exists at target URI")]
    ResourceMustBeNull,

    /// `DAV:no-external-entities` (403 Forbidden)
    ///
    /// The request body declares entities the server refuses to expand.
    #[error("External entities not allowed in request body")]
    NoExternalEntities,

    /// `CALDAV:calendar-collection-location-ok` (403 Forbidden)
    ///
    /// The Request-URI does not identify a valid location for a calendar collection.
    #[error("Invalid location for calendar collection")]
    CalendarCollectionLocationOk,
}

impl PreconditionError {
    /// Returns the HTTP status code for this precondition.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceMustBeNull => StatusCode::CONFLICT,
            Self::NoExternalEntities | Self::CalendarCollectionLocationOk => {
                StatusCode::FORBIDDEN
            }
        }
    }

    /// Returns the XML element name.
    #[must_use]
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::ResourceMustBeNull => "resource-must-be-null",
            Self::NoExternalEntities => "no-external-entities",
            Self::CalendarCollectionLocationOk => "calendar-collection-location-ok",
        }
    }

    /// Returns the namespace of the XML element.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::ResourceMustBeNull | Self::NoExternalEntities => DAV_NS,
            Self::CalendarCollectionLocationOk => CALDAV_NS,
        }
    }

    /// Serializes the precondition to an RFC 4918 §16 XML error body.
    ///
    /// ```xml
    /// <?xml version="1.0" encoding="utf-8"?>
    /// <D:error xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
    ///   <C:calendar-collection-location-ok/>
    /// </D:error>
    /// ```
    #[must_use]
    pub fn to_xml(&self) -> String {
        let (prefix, ns_decls) = if self.namespace() == CALDAV_NS {
            ("C", format!("xmlns:D=\"{DAV_NS}\" xmlns:C=\"{CALDAV_NS}\""))
        } else {
            ("D", format!("xmlns:D=\"{DAV_NS}\""))
        };

        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<D:error {ns_decls}>\n  <{prefix}:{}/>\n</D:error>",
            self.element_name()
        )
    }
}
