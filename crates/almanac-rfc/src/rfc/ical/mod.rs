//! iCalendar RFC 5545 document model and serialization.
//!
//! - `core`: the calendar document, events, alarms and properties
//! - `build`: text serialization of a document
//!
//! ## Example
//!
//! ```rust
//! use almanac_rfc::rfc::ical::{build, core::*};
//!
//! let mut doc = CalendarDocument::new("-//My App//EN");
//! let mut event = EventComponent::new();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Team Meeting"));
//! doc.add_event(event);
//!
//! let output = build::serialize(&doc);
//! assert!(output.contains("SUMMARY:Team Meeting"));
//! ```

pub mod build;
pub mod core;

pub use build::serialize;
pub use core::{Alarm, CalendarDocument, ComponentKind, EventComponent, Parameter, Property, Value};
