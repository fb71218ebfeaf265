//! iCalendar core models (RFC 5545).
//!
//! A calendar document is a flat list of events, each carrying its
//! properties and alarms. Document values are always owned so a rendering can
//! be copied and rewritten without touching stored data.

mod component;
mod parameter;
mod property;

pub use component::{Alarm, CalendarDocument, ComponentKind, EventComponent};
pub use parameter::Parameter;
pub use property::{Property, Value, names};
