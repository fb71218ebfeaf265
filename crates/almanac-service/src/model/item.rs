//! Child items of a collection and the stamps they carry.

use std::collections::BTreeMap;

use almanac_rfc::rfc::ical::EventComponent;

/// Kind of a stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A note; the only kind whose stamps are rendered into calendars.
    Note,
    /// An opaque file resource.
    File,
}

/// Discriminant used to key an item's stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StampKind {
    Event,
    Task,
    Message,
}

/// A facet attached to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    /// Calendar event facet carrying its VEVENT.
    Event(EventComponent),
    /// Task marker.
    Task,
    /// Message marker.
    Message,
}

impl Stamp {
    #[must_use]
    pub const fn kind(&self) -> StampKind {
        match self {
            Self::Event(_) => StampKind::Event,
            Self::Task => StampKind::Task,
            Self::Message => StampKind::Message,
        }
    }
}

/// A child entity of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: uuid::Uuid,
    /// Path segment of the item within its collection.
    pub name: String,
    pub kind: ItemKind,
    /// At most one stamp per kind.
    pub stamps: BTreeMap<StampKind, Stamp>,
}

impl Item {
    fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            kind,
            stamps: BTreeMap::new(),
        }
    }

    /// Creates a note item without stamps.
    #[must_use]
    pub fn note(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Note)
    }

    /// Creates a file item.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::File)
    }

    /// Attaches a stamp, replacing any existing stamp of the same kind.
    #[must_use]
    pub fn with_stamp(mut self, stamp: Stamp) -> Self {
        self.stamps.insert(stamp.kind(), stamp);
        self
    }

    /// Returns the stamp of the given kind.
    #[must_use]
    pub fn stamp(&self, kind: StampKind) -> Option<&Stamp> {
        self.stamps.get(&kind)
    }

    /// Returns the event carried by this item's event stamp.
    #[must_use]
    pub fn event(&self) -> Option<&EventComponent> {
        match self.stamp(StampKind::Event)? {
            Stamp::Event(event) => Some(event),
            Stamp::Task | Stamp::Message => None,
        }
    }
}
