//! iCalendar component types (RFC 5545 §3.4, §3.6.1, §3.6.6).

use super::{Property, names};
use crate::error::{RfcError, RfcResult};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VALARM component (nested within VEVENT).
    Alarm,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Alarm => "VALARM",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A VALARM sub-component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alarm {
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
}

impl Alarm {
    /// Creates a display alarm with the given trigger and description.
    #[must_use]
    pub fn display(trigger: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            properties: vec![
                Property::text(names::ACTION, "DISPLAY"),
                Property::raw(names::TRIGGER, trigger),
                Property::text(names::DESCRIPTION, description),
            ],
        }
    }
}

/// A VEVENT component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventComponent {
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested VALARM components.
    pub alarms: Vec<Alarm>,
}

impl EventComponent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property to this event.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds an alarm to this event.
    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is(name)).collect()
    }

    fn value_of(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.value_of(names::UID)
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.value_of(names::SUMMARY)
    }

    /// Returns the DESCRIPTION property value if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.value_of(names::DESCRIPTION)
    }

    /// Returns the LOCATION property value if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.value_of(names::LOCATION)
    }

    /// Returns the ORGANIZER property value if present.
    #[must_use]
    pub fn organizer(&self) -> Option<&str> {
        self.value_of(names::ORGANIZER)
    }

    /// Returns every ATTENDEE value.
    #[must_use]
    pub fn attendees(&self) -> Vec<&str> {
        self.get_properties(names::ATTENDEE)
            .into_iter()
            .map(|p| p.value.as_str())
            .collect()
    }

    fn validate(&self) -> RfcResult<()> {
        self.properties
            .iter()
            .chain(self.alarms.iter().flat_map(|a| a.properties.iter()))
            .try_for_each(Property::validate)
    }
}

/// Top-level iCalendar object.
///
/// Holds the VCALENDAR properties and the VEVENTs in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    /// VCALENDAR properties (VERSION, PRODID, ...).
    pub properties: Vec<Property>,
    /// Events in the order they were added.
    pub events: Vec<EventComponent>,
}

impl CalendarDocument {
    /// Creates a new empty document with the required properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        Self {
            properties: vec![
                Property::text(names::VERSION, "2.0"),
                Property::text(names::PRODID, prodid),
            ],
            events: Vec::new(),
        }
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.get_property(names::PRODID)?.as_text()
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get_property(names::VERSION)?.as_text()
    }

    /// Returns the first calendar-level property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.is(name))
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: EventComponent) {
        self.events.push(event);
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> &[EventComponent] {
        &self.events
    }

    /// ## Summary
    /// Produces an independent deep copy of the document.
    ///
    /// Every property is re-validated on the way, so the copy is guaranteed
    /// to serialize to well-formed content lines.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` if any property is malformed; no
    /// partial copy is returned.
    pub fn try_copy(&self) -> RfcResult<Self> {
        self.properties
            .iter()
            .try_for_each(Property::validate)
            .and_then(|()| self.events.iter().try_for_each(EventComponent::validate))
            .map_err(|e| RfcError::ValidationError(format!("cannot copy calendar: {e}")))?;

        Ok(self.clone())
    }
}

impl Default for CalendarDocument {
    fn default() -> Self {
        Self::new(almanac_core::config::DEFAULT_PRODID)
    }
}
