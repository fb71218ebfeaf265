//! iCalendar property types (RFC 5545 §3.1, §3.8).

use super::Parameter;
use crate::error::{RfcError, RfcResult};

/// A property value.
///
/// Only the distinctions that change how a value is written are kept:
/// TEXT values are escaped on output, everything else is written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// TEXT value (RFC 5545 §3.3.11), unescaped.
    Text(String),
    /// CAL-ADDRESS value (RFC 5545 §3.3.3), usually a `mailto:` URI.
    CalAddress(String),
    /// Any other value type kept in its wire form (DATE-TIME, DURATION, ...).
    Raw(String),
}

impl Value {
    /// Returns the value as a string slice regardless of its type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::CalAddress(s) | Self::Raw(s) => s,
        }
    }

    /// Returns the value as text if it is a TEXT value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A fully parsed iCalendar property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, Value::Text(value.into()))
    }

    /// Creates a property with a calendar user address value.
    #[must_use]
    pub fn cal_address(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, Value::CalAddress(value.into()))
    }

    /// Creates a property whose value is kept in wire form.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, Value::Raw(value.into()))
    }

    fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value,
        }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns whether this property has the given name (case-insensitive).
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// ## Summary
    /// Checks that the property can be written back as a content line.
    ///
    /// Names must be IANA tokens or X-names (RFC 5545 §3.1). Non-TEXT values
    /// may not contain control characters since they are written unescaped.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` naming the offending property.
    pub fn validate(&self) -> RfcResult<()> {
        if !is_token(&self.name) {
            return Err(RfcError::ValidationError(format!(
                "invalid property name '{}'",
                self.name
            )));
        }

        if let Some(param) = self.params.iter().find(|p| !is_token(&p.name)) {
            return Err(RfcError::ValidationError(format!(
                "invalid parameter name '{}' on {}",
                param.name, self.name
            )));
        }

        if let Some(param) = self
            .params
            .iter()
            .find(|p| p.values.iter().any(|v| v.chars().any(is_unwritable_param_char)))
        {
            return Err(RfcError::ValidationError(format!(
                "control character in parameter '{}' on {}",
                param.name, self.name
            )));
        }

        match &self.value {
            Value::Text(_) => Ok(()),
            Value::CalAddress(v) | Value::Raw(v) if v.chars().any(char::is_control) => {
                Err(RfcError::ValidationError(format!(
                    "control character in {} value",
                    self.name
                )))
            }
            Value::CalAddress(_) | Value::Raw(_) => Ok(()),
        }
    }
}

/// Parameter values allow HTAB, and LF which is caret-encoded (RFC 6868).
fn is_unwritable_param_char(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n')
}

/// `iana-token` / `x-name`: one or more ALPHA, DIGIT or "-".
fn is_token(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Common property names as constants.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive component properties
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time properties
    pub const DTEND: &str = "DTEND";
    pub const DTSTART: &str = "DTSTART";
    pub const DURATION: &str = "DURATION";

    // Relationship properties
    pub const ATTENDEE: &str = "ATTENDEE";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const UID: &str = "UID";

    // Change management
    pub const DTSTAMP: &str = "DTSTAMP";

    // Alarm properties
    pub const ACTION: &str = "ACTION";
    pub const TRIGGER: &str = "TRIGGER";
}
