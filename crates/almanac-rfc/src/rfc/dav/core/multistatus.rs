//! Multistatus response types.

use super::href::Href;
use super::property::DavProperty;

/// A multistatus response (RFC 4918 §13).
#[derive(Debug, Clone, Default)]
pub struct Multistatus {
    /// Individual responses.
    pub responses: Vec<PropstatResponse>,
    /// Optional response description.
    pub description: Option<String>,
}

impl Multistatus {
    /// Creates an empty multistatus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a response.
    pub fn add_response(&mut self, response: PropstatResponse) {
        self.responses.push(response);
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl From<PropstatResponse> for Multistatus {
    fn from(response: PropstatResponse) -> Self {
        Self {
            responses: vec![response],
            description: None,
        }
    }
}

/// A single response within a multistatus.
#[derive(Debug, Clone)]
pub struct PropstatResponse {
    /// The resource href.
    pub href: Href,
    /// Property statuses grouped by status code.
    pub propstats: Vec<Propstat>,
    /// Optional response description.
    pub description: Option<String>,
}

impl PropstatResponse {
    /// Creates a response for a resource.
    #[must_use]
    pub fn new(href: impl Into<Href>) -> Self {
        Self {
            href: href.into(),
            propstats: Vec::new(),
            description: None,
        }
    }

    /// Adds a propstat to the response.
    pub fn add_propstat(&mut self, propstat: Propstat) {
        self.propstats.push(propstat);
    }

    /// Adds `property` under `status`, merging into an existing propstat.
    pub fn push(&mut self, status: Status, property: DavProperty) {
        if let Some(group) = self.propstats.iter_mut().find(|p| p.status == status) {
            group.properties.push(property);
        } else {
            self.propstats.push(Propstat::new(status, vec![property]));
        }
    }

    /// Returns whether any propstat carries a non-2xx status.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.propstats.iter().any(|p| !p.status.is_success())
    }
}

/// Property status grouping.
#[derive(Debug, Clone)]
pub struct Propstat {
    /// HTTP status.
    pub status: Status,
    /// Properties with this status.
    pub properties: Vec<DavProperty>,
    /// Optional description.
    pub description: Option<String>,
}

impl Propstat {
    /// Creates a new propstat.
    #[must_use]
    pub fn new(status: Status, properties: Vec<DavProperty>) -> Self {
        Self {
            status,
            properties,
            description: None,
        }
    }
}

/// HTTP status for propstat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 409 Conflict
    Conflict,
    /// 424 Failed Dependency
    FailedDependency,
    /// Custom status
    Custom(u16),
}

impl Status {
    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::FailedDependency => 424,
            Self::Custom(code) => *code,
        }
    }

    /// Returns whether the code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.code(), 200..=299)
    }

    /// Returns the status line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.code(), self.reason_phrase())
    }

    /// Returns the reason phrase.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::FailedDependency => "Failed Dependency",
            Self::Custom(_) => "Unknown",
        }
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        match code {
            200 => Self::Ok,
            201 => Self::Created,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            424 => Self::FailedDependency,
            _ => Self::Custom(code),
        }
    }
}
