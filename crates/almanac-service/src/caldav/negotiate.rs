//! Content negotiation for GET/HEAD on calendar collections.

use almanac_core::constants::CALENDAR_MEDIA_TYPE;

/// How a collection is rendered in a GET/HEAD response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The assembled iCalendar document.
    RawCalendar,
    /// The generic collection rendering.
    Generic,
}

/// ## Summary
/// Chooses the rendering for a request from its `Accept` header values.
///
/// A value matches only when, trimmed, it equals `text/calendar` ignoring
/// ASCII case. Lists and q-values are not interpreted, so
/// `text/calendar, text/html` does not match.
#[must_use]
pub fn negotiate<'a>(accept_values: impl IntoIterator<Item = &'a str>) -> RenderMode {
    if accept_values
        .into_iter()
        .any(|value| value.trim().eq_ignore_ascii_case(CALENDAR_MEDIA_TYPE))
    {
        RenderMode::RawCalendar
    } else {
        RenderMode::Generic
    }
}
