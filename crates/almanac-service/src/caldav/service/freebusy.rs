//! Free/busy redaction of calendar documents.

use almanac_rfc::rfc::ical::core::names;
use almanac_rfc::rfc::ical::{CalendarDocument, Value};

use crate::error::{ServiceError, ServiceResult};
use crate::model::{AccessContext, AccessTicket};

/// Replacement text for redacted descriptive properties.
pub const BUSY: &str = "Busy";

/// ## Summary
/// Applies free/busy redaction when the request's ticket calls for it.
///
/// Redaction happens only if the context carries a ticket, that ticket's key
/// is among `registered`, and the ticket is free/busy only. Otherwise `doc`
/// is returned unchanged.
///
/// ## Errors
/// Propagates `redact_free_busy` failures.
pub fn redact_for_context(
    doc: CalendarDocument,
    registered: &[AccessTicket],
    ctx: &AccessContext,
) -> ServiceResult<CalendarDocument> {
    let Some(ticket) = ctx.ticket() else {
        return Ok(doc);
    };

    let is_registered = registered.iter().any(|t| t.key == ticket.key);
    if is_registered && ticket.is_free_busy() {
        redact_free_busy(&doc)
    } else {
        Ok(doc)
    }
}

/// ## Summary
/// Returns a copy of `doc` with only the busy/free shape of its events.
///
/// Alarms are dropped, SUMMARY, DESCRIPTION and LOCATION become `Busy`, and
/// ATTENDEE and ORGANIZER become empty. Redacted properties lose their
/// parameters. Everything else, including timing and UID, is kept.
///
/// ## Errors
/// `MalformedCalendarData` if the document cannot be copied; nothing partial
/// is returned.
pub fn redact_free_busy(doc: &CalendarDocument) -> ServiceResult<CalendarDocument> {
    let mut copy = doc
        .try_copy()
        .map_err(|e| ServiceError::MalformedCalendarData(e.to_string()))?;

    for event in &mut copy.events {
        event.alarms.clear();

        for prop in &mut event.properties {
            let replacement = if prop.is(names::SUMMARY)
                || prop.is(names::DESCRIPTION)
                || prop.is(names::LOCATION)
            {
                Value::Text(BUSY.to_owned())
            } else if prop.is(names::ATTENDEE) || prop.is(names::ORGANIZER) {
                Value::CalAddress(String::new())
            } else {
                continue;
            };
            prop.value = replacement;
            prop.params.clear();
        }
    }

    tracing::debug!(events = copy.events.len(), "Applied free/busy redaction");
    Ok(copy)
}
