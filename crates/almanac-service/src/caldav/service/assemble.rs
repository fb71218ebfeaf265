//! Building a calendar document from a collection's items.

use almanac_rfc::rfc::ical::CalendarDocument;

use crate::model::{Collection, ItemKind};

/// ## Summary
/// Assembles a fresh document from the event stamps of a collection's notes.
///
/// Children are visited in stored order. Items that are not notes, and notes
/// without an event stamp, contribute nothing. Events are cloned so the
/// result never aliases stored state.
#[must_use]
pub fn assemble_calendar(collection: &Collection, prodid: &str) -> CalendarDocument {
    let mut doc = CalendarDocument::new(prodid);

    for item in &collection.children {
        if item.kind != ItemKind::Note {
            continue;
        }
        if let Some(event) = item.event() {
            doc.add_event(event.clone());
        }
    }

    tracing::debug!(
        href = %collection.href,
        events = doc.events().len(),
        "Assembled calendar"
    );
    doc
}
