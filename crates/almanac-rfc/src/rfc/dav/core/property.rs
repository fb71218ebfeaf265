//! DAV property types.

use super::namespace::QName;

/// A DAV property with name and optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DavProperty {
    /// The property name.
    pub name: QName,
    /// The property value (if known).
    pub value: Option<PropertyValue>,
}

impl DavProperty {
    /// Creates a property with no value, used when echoing names in a propstat.
    #[must_use]
    pub fn name_only(name: QName) -> Self {
        Self { name, value: None }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(PropertyValue::Text(value.into())),
        }
    }

    /// Creates an empty property.
    #[must_use]
    pub fn empty(name: QName) -> Self {
        Self {
            name,
            value: Some(PropertyValue::Empty),
        }
    }

    /// Returns the text value, if this property carries one.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            Some(PropertyValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

/// Property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Character data.
    Text(String),
    /// Nested XML kept verbatim.
    Xml(String),
    /// Present but empty element.
    Empty,
}
