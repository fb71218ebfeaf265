//! Multistatus XML serialization.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::rfc::dav::core::{
    CALDAV_NS, DAV_NS, DavProperty, Multistatus, PropertyValue, PropstatResponse,
};

/// Serializes a multistatus response to XML.
///
/// ## Summary
/// Converts a `Multistatus` response structure into `WebDAV` XML for the
/// response body.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8.
pub fn serialize_multistatus(multistatus: &Multistatus) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut elem = BytesStart::new("D:multistatus");
    elem.push_attribute(("xmlns:D", DAV_NS));
    elem.push_attribute(("xmlns:C", CALDAV_NS));
    writer.write_event(Event::Start(elem))?;

    for response in &multistatus.responses {
        write_response(&mut writer, response)?;
    }

    if let Some(ref desc) = multistatus.description {
        write_text_element(&mut writer, "D:responsedescription", desc)?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:multistatus")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in multistatus XML: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}

fn write_response<W: Write>(
    writer: &mut Writer<W>,
    response: &PropstatResponse,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("D:response")))?;

    write_text_element(writer, "D:href", response.href.as_str())?;

    for propstat in &response.propstats {
        writer.write_event(Event::Start(BytesStart::new("D:propstat")))?;
        writer.write_event(Event::Start(BytesStart::new("D:prop")))?;

        for prop in &propstat.properties {
            write_property(writer, prop)?;
        }

        writer.write_event(Event::End(BytesEnd::new("D:prop")))?;
        write_text_element(writer, "D:status", &propstat.status.status_line())?;

        if let Some(ref desc) = propstat.description {
            write_text_element(writer, "D:responsedescription", desc)?;
        }

        writer.write_event(Event::End(BytesEnd::new("D:propstat")))?;
    }

    if let Some(ref desc) = response.description {
        write_text_element(writer, "D:responsedescription", desc)?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:response")))?;

    Ok(())
}

fn write_property<W: Write>(
    writer: &mut Writer<W>,
    prop: &DavProperty,
) -> Result<(), quick_xml::Error> {
    // Dead properties in foreign namespaces get a local declaration
    let (elem_name, foreign_ns) = match prop.name.namespace.default_prefix() {
        Some(prefix) => (format!("{prefix}:{}", prop.name.local_name()), None),
        None => (
            format!("X:{}", prop.name.local_name()),
            Some(prop.name.namespace_uri()),
        ),
    };
    let start = || {
        let mut elem = BytesStart::new(elem_name.as_str());
        if let Some(ns) = foreign_ns {
            elem.push_attribute(("xmlns:X", ns));
        }
        elem
    };

    match &prop.value {
        Some(PropertyValue::Text(text)) => {
            writer.write_event(Event::Start(start()))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(elem_name.as_str())))?;
        }
        Some(PropertyValue::Xml(xml)) => {
            writer.write_event(Event::Start(start()))?;
            writer
                .get_mut()
                .write_all(xml.as_bytes())
                .map_err(|e| quick_xml::Error::Io(std::sync::Arc::new(e)))?;
            writer.write_event(Event::End(BytesEnd::new(elem_name.as_str())))?;
        }
        Some(PropertyValue::Empty) | None => {
            writer.write_event(Event::Empty(start()))?;
        }
    }

    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
