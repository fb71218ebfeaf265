//! iCalendar serializer (RFC 5545).
//!
//! Properties are written in a canonical order so the output (and any `ETag`
//! derived from it) is stable. Events keep the order they have in the
//! document.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::ical::core::{
    Alarm, CalendarDocument, ComponentKind, EventComponent, Parameter, Property, Value,
};

/// Serializes a calendar document to a string.
#[must_use]
pub fn serialize(doc: &CalendarDocument) -> String {
    let mut out = begin(ComponentKind::Calendar);
    write_properties(&mut out, &doc.properties, ComponentKind::Calendar);
    for event in &doc.events {
        out.push_str(&serialize_event(event));
    }
    out.push_str(&end(ComponentKind::Calendar));
    out
}

/// Serializes a single VEVENT, including its alarms.
#[must_use]
pub fn serialize_event(event: &EventComponent) -> String {
    let mut out = begin(ComponentKind::Event);
    write_properties(&mut out, &event.properties, ComponentKind::Event);
    for alarm in &event.alarms {
        write_alarm(&mut out, alarm);
    }
    out.push_str(&end(ComponentKind::Event));
    out
}

fn write_alarm(out: &mut String, alarm: &Alarm) {
    out.push_str(&begin(ComponentKind::Alarm));
    write_properties(out, &alarm.properties, ComponentKind::Alarm);
    out.push_str(&end(ComponentKind::Alarm));
}

fn begin(kind: ComponentKind) -> String {
    fold_line(&format!("BEGIN:{kind}"))
}

fn end(kind: ComponentKind) -> String {
    fold_line(&format!("END:{kind}"))
}

fn write_properties(out: &mut String, props: &[Property], kind: ComponentKind) {
    for prop in canonical_property_order(props, kind) {
        out.push_str(&serialize_property(prop));
    }
}

/// Serializes a property to a folded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    match &prop.value {
        Value::Text(text) => line.push_str(&escape_text(text)),
        Value::CalAddress(raw) | Value::Raw(raw) => line.push_str(raw),
    }

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &["VERSION", "PRODID", "CALSCALE", "METHOD"],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "DURATION",
            "RRULE",
            "RDATE",
            "EXDATE",
            "RECURRENCE-ID",
            "SUMMARY",
            "DESCRIPTION",
            "LOCATION",
            "CLASS",
            "STATUS",
            "TRANSP",
            "ORGANIZER",
            "ATTENDEE",
        ],
        ComponentKind::Alarm => &["ACTION", "TRIGGER", "DESCRIPTION", "SUMMARY", "DURATION", "REPEAT"],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());
    for &name in order {
        ordered.extend(props.iter().filter(|p| p.is(name)));
    }

    // X-properties and anything unlisted keep their original relative order
    ordered.extend(props.iter().filter(|p| !order.iter().any(|&n| p.is(n))));
    ordered
}
