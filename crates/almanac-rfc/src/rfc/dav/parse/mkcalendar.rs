//! MKCALENDAR request XML parsing (RFC 4791 §5.3.1.1).

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::{ParseError, ParseResult};
use crate::rfc::dav::core::{DavProperty, Namespace, PropertyValue, QName};

/// Parsed MKCALENDAR request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MkcalendarRequest {
    /// Properties to set on the new collection, in document order.
    pub properties: Vec<DavProperty>,
}

/// In-progress property element inside `DAV:prop`.
struct PendingProperty {
    name: QName,
    /// Character data with entities resolved.
    text: String,
    /// Inner markup kept in its escaped wire form.
    raw: String,
    nested: bool,
}

impl PendingProperty {
    fn new(name: QName) -> Self {
        Self {
            name,
            text: String::new(),
            raw: String::new(),
            nested: false,
        }
    }

    fn finish(self) -> DavProperty {
        let value = if self.nested {
            PropertyValue::Xml(self.raw.trim().to_owned())
        } else if self.text.trim().is_empty() {
            PropertyValue::Empty
        } else {
            PropertyValue::Text(self.text.trim().to_owned())
        };
        DavProperty {
            name: self.name,
            value: Some(value),
        }
    }
}

/// ## Summary
/// Parses a MKCALENDAR request body.
///
/// The root element must be `CALDAV:mkcalendar`. Every child of
/// `DAV:set/DAV:prop` becomes one property; elements with nested markup are
/// kept as raw XML. An empty body yields no properties.
///
/// ## Errors
/// Returns an error if the XML is malformed, the root element is wrong, or the
/// body declares or references non-predefined entities.
pub fn parse_mkcalendar(xml: &[u8]) -> ParseResult<MkcalendarRequest> {
    if xml.iter().all(u8::is_ascii_whitespace) {
        return Ok(MkcalendarRequest::default());
    }

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut namespaces: Vec<(String, String)> = Vec::new();
    let mut scopes: Vec<usize> = Vec::new();

    let mut request = MkcalendarRequest::default();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut in_set = false;
    let mut in_prop = false;
    let mut current: Option<PendingProperty> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                scopes.push(collect_namespaces(e, &mut namespaces)?);
                depth += 1;

                match depth {
                    1 => {
                        check_root(&resolve_qname(e, &namespaces)?)?;
                        saw_root = true;
                    }
                    2 => in_set = resolve_qname(e, &namespaces)? == QName::dav("set"),
                    3 => in_prop = in_set && resolve_qname(e, &namespaces)? == QName::dav("prop"),
                    4 if in_prop => {
                        current = Some(PendingProperty::new(resolve_qname(e, &namespaces)?));
                    }
                    _ => {
                        if let Some(pending) = current.as_mut() {
                            pending.nested = true;
                            push_raw_start(&mut pending.raw, e, false)?;
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let added = collect_namespaces(e, &mut namespaces)?;

                match depth + 1 {
                    1 => {
                        check_root(&resolve_qname(e, &namespaces)?)?;
                        saw_root = true;
                    }
                    4 if in_prop => {
                        request
                            .properties
                            .push(DavProperty::empty(resolve_qname(e, &namespaces)?));
                    }
                    _ => {
                        if let Some(pending) = current.as_mut() {
                            pending.nested = true;
                            push_raw_start(&mut pending.raw, e, true)?;
                        }
                    }
                }

                namespaces.truncate(namespaces.len() - added);
            }
            Ok(Event::Text(ref e)) => {
                if let Some(pending) = current.as_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    pending.text.push_str(&decoded);
                    pending.raw.push_str(&decoded);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(pending) = current.as_mut() {
                    let text = std::str::from_utf8(e.as_ref())?;
                    pending.text.push_str(text);
                    pending.raw.push_str("<![CDATA[");
                    pending.raw.push_str(text);
                    pending.raw.push_str("]]>");
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                let name = std::str::from_utf8(e)?;
                let resolved = resolve_entity(name)?;
                if let Some(pending) = current.as_mut() {
                    pending.text.push(resolved);
                    pending.raw.push('&');
                    pending.raw.push_str(name);
                    pending.raw.push(';');
                }
            }
            Ok(Event::DocType(ref e)) => {
                let doctype = std::str::from_utf8(e.as_ref())?;
                if doctype.contains("<!ENTITY") {
                    tracing::warn!("Rejected MKCALENDAR body declaring entities");
                    return Err(ParseError::entity("DOCTYPE"));
                }
            }
            Ok(Event::End(ref e)) => {
                match depth {
                    2 => in_set = false,
                    3 => in_prop = false,
                    4 => {
                        if let Some(pending) = current.take() {
                            request.properties.push(pending.finish());
                        }
                    }
                    _ => {
                        if let Some(pending) = current.as_mut() {
                            let name = std::str::from_utf8(e.name().as_ref())?.to_owned();
                            pending.raw.push_str("</");
                            pending.raw.push_str(&name);
                            pending.raw.push('>');
                        }
                    }
                }

                depth = depth.saturating_sub(1);
                let added = scopes.pop().unwrap_or(0);
                namespaces.truncate(namespaces.len().saturating_sub(added));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ParseError::invalid_value("request body has no root element"));
    }

    Ok(request)
}

fn check_root(qname: &QName) -> ParseResult<()> {
    if qname.is_caldav() && qname.local_name() == "mkcalendar" {
        Ok(())
    } else {
        Err(ParseError::unexpected_element(&qname.to_string()))
    }
}

/// Records the `xmlns` declarations of an element; returns how many were added.
fn collect_namespaces(
    e: &BytesStart<'_>,
    namespaces: &mut Vec<(String, String)>,
) -> ParseResult<usize> {
    let mut added = 0;
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.push((prefix.to_owned(), value.to_owned()));
            added += 1;
        } else if key == "xmlns" {
            namespaces.push((String::new(), value.to_owned()));
            added += 1;
        } else {
            // Other attributes carry no namespace information
        }
    }
    Ok(added)
}

/// Resolves a `QName` from an element against the in-scope declarations.
fn resolve_qname(e: &BytesStart<'_>, namespaces: &[(String, String)]) -> ParseResult<QName> {
    let name_bytes = e.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let (prefix, local_name) = name.split_once(':').unwrap_or(("", name));

    let namespace = namespaces
        .iter()
        .rev()
        .find(|(p, _)| p == prefix)
        .map(|(_, ns)| ns.clone());

    match namespace {
        Some(ns) => Ok(QName::new(Namespace::new(ns), local_name.to_owned())),
        None if prefix.is_empty() => Ok(QName::new(Namespace::new(String::new()), local_name.to_owned())),
        None => Err(ParseError::xml(format!("undeclared namespace prefix '{prefix}'"))),
    }
}

fn push_raw_start(raw: &mut String, e: &BytesStart<'_>, empty: bool) -> ParseResult<()> {
    raw.push('<');
    raw.push_str(std::str::from_utf8(e.name().as_ref())?);
    for attr in e.attributes() {
        let attr = attr?;
        raw.push(' ');
        raw.push_str(std::str::from_utf8(attr.key.as_ref())?);
        raw.push_str("=\"");
        raw.push_str(std::str::from_utf8(&attr.value)?);
        raw.push('"');
    }
    raw.push_str(if empty { "/>" } else { ">" });
    Ok(())
}

/// Resolves a predefined or numeric character reference.
fn resolve_entity(name: &str) -> ParseResult<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => num.parse::<u32>(),
        }
        .map_err(|err| {
            tracing::warn!(error = ?err, value = %num, "Invalid numeric character reference");
            ParseError::invalid_value("invalid numeric character reference")
        })?;

        return char::from_u32(code)
            .filter(|_| is_valid_xml_char(code))
            .ok_or_else(|| ParseError::invalid_value("invalid XML numeric character reference"));
    }

    match name {
        "amp" => Ok('&'),
        "lt" => Ok('<'),
        "gt" => Ok('>'),
        "quot" => Ok('"'),
        "apos" => Ok('\''),
        other => Err(ParseError::invalid_value(format!(
            "undeclared entity reference: &{other};"
        ))),
    }
}

#[must_use]
fn is_valid_xml_char(value: u32) -> bool {
    matches!(
        value,
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x0001_0000..=0x0010_FFFF
    )
}
