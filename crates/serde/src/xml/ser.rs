//! FHIR XML writer.
//!
//! A resource is first encoded to its FHIR JSON value; the writer walks that
//! value and emits quick-xml events, folding each `_field` sibling back into
//! the attributes and `<extension>` children of its element.

use super::utils;
use crate::error::{Result, SerdeError};
use meridian_serde_support::{CodecError, FhirCodec, Object};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use serde_json::Value;
use std::borrow::Cow;
use std::io::Write;

static NULL: Value = Value::Null;

/// Serialize a FHIR resource to an XML string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::xml::to_xml_string;
/// use meridian_fhir::r4::Patient;
///
/// let patient = Patient { active: Some(true.into()), ..Default::default() };
/// let xml = to_xml_string(&patient)?;
/// assert!(xml.contains(r#"<active value="true"/>"#));
/// ```
pub fn to_xml_string<T: FhirCodec>(value: &T) -> Result<String> {
    into_string(to_xml_vec(value)?)
}

/// Serialize a FHIR resource to an XML string indented by two spaces.
pub fn to_xml_string_pretty<T: FhirCodec>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(value, Writer::new_with_indent(&mut buffer, b' ', 2))?;
    into_string(buffer)
}

/// Serialize a FHIR resource to XML bytes.
pub fn to_xml_vec<T: FhirCodec>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a FHIR resource to a writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: FhirCodec,
    W: Write,
{
    write_document(value, Writer::new(writer))
}

fn into_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| SerdeError::Custom(format!("Invalid UTF-8: {}", e)))
}

fn write_document<T, W>(value: &T, writer: Writer<W>) -> Result<()>
where
    T: FhirCodec,
    W: Write,
{
    let resource = match value.encode_value()? {
        Some(Value::Object(resource)) => resource,
        _ => {
            return Err(SerdeError::Custom(
                "only resources can be written as an XML document".to_string(),
            ));
        }
    };

    let mut serializer = XmlSerializer { writer };
    serializer
        .writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    serializer.write_resource(&resource, true)
}

struct XmlSerializer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSerializer<W> {
    /// Writes `<ResourceType>` and its members. Only the document root
    /// declares the FHIR namespace.
    fn write_resource(&mut self, resource: &Object, root: bool) -> Result<()> {
        let resource_type = resource
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or(CodecError::MissingResourceType)?;
        tracing::trace!(resource_type, "writing resource element");

        let mut element = BytesStart::new(resource_type);
        if root {
            element.push_attribute(("xmlns", utils::FHIR_NAMESPACE));
        }
        self.writer.write_event(Event::Start(element))?;
        self.write_members(resource, &[])?;
        self.writer
            .write_event(Event::End(BytesEnd::new(resource_type)))?;
        Ok(())
    }

    /// Writes every member of `object` as child elements, pairing each key
    /// with its `_key` metadata. Keys in `attributes` were already written
    /// on the parent's start tag.
    fn write_members(&mut self, object: &Object, attributes: &[&str]) -> Result<()> {
        for (key, value) in object {
            if key == "resourceType" || attributes.contains(&key.as_str()) {
                continue;
            }
            if let Some(target) = utils::metadata_target(key) {
                // Metadata with no value beside it still needs an element.
                if !object.contains_key(target) {
                    self.write_member(target, &NULL, Some(value))?;
                }
                continue;
            }
            let meta = object.get(&format!("_{}", key));
            self.write_member(key, value, meta)?;
        }
        Ok(())
    }

    /// Arrays become repeated elements, with `_name[i]` folded into the
    /// i-th element.
    fn write_member(&mut self, name: &str, value: &Value, meta: Option<&Value>) -> Result<()> {
        let metas: &[Value] = match meta {
            Some(Value::Array(metas)) => metas,
            _ => &[],
        };
        let values: &[Value] = match value {
            Value::Array(values) => values,
            _ if !metas.is_empty() => &[],
            _ => return self.write_element(name, value, meta.filter(|m| !m.is_null())),
        };

        for index in 0..values.len().max(metas.len()) {
            let item = values.get(index).unwrap_or(&NULL);
            let item_meta = metas.get(index).filter(|m| !m.is_null());
            if item.is_null() && item_meta.is_none() {
                continue;
            }
            self.write_element(name, item, item_meta)?;
        }
        Ok(())
    }

    fn write_element(&mut self, name: &str, value: &Value, meta: Option<&Value>) -> Result<()> {
        match value {
            Value::String(xhtml) if utils::is_div_element(name) => self.write_div(xhtml),
            Value::Object(object) if object.contains_key("resourceType") => {
                self.writer
                    .write_event(Event::Start(BytesStart::new(name)))?;
                self.write_resource(object, false)?;
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
                Ok(())
            }
            Value::Object(object) => self.write_complex(name, object),
            Value::Array(_) => Err(SerdeError::Custom(format!(
                "nested array in element `{}`",
                name
            ))),
            scalar => self.write_primitive(name, scalar, meta),
        }
    }

    /// `<name id=".." value="..">` with the metadata's extensions as
    /// children.
    fn write_primitive(&mut self, name: &str, value: &Value, meta: Option<&Value>) -> Result<()> {
        let meta = meta.and_then(Value::as_object);
        let mut element = BytesStart::new(name);
        if let Some(id) = meta.and_then(|m| m.get("id")).and_then(Value::as_str) {
            element.push_attribute(attribute("id", id));
        }
        if let Some(text) = utils::scalar_text(value) {
            element.push_attribute(attribute("value", &text));
        }

        match meta.and_then(|m| m.get("extension")).filter(|e| !e.is_null()) {
            Some(extension) => {
                self.writer.write_event(Event::Start(element))?;
                self.write_member("extension", extension, None)?;
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
            None => self.writer.write_event(Event::Empty(element))?,
        }
        Ok(())
    }

    /// Complex elements carry `id`, and extensions their `url`, as
    /// attributes.
    fn write_complex(&mut self, name: &str, object: &Object) -> Result<()> {
        let mut element = BytesStart::new(name);
        let mut attributes = Vec::new();
        if let Some(id) = object.get("id").and_then(Value::as_str) {
            element.push_attribute(attribute("id", id));
            attributes.push("id");
        }
        if utils::is_extension_element(name) {
            if let Some(url) = object.get("url").and_then(Value::as_str) {
                element.push_attribute(attribute("url", url));
                attributes.push("url");
            }
        }

        let has_children = object
            .iter()
            .any(|(key, value)| !attributes.contains(&key.as_str()) && !value.is_null());
        if !has_children {
            self.writer.write_event(Event::Empty(element))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(element))?;
        self.write_members(object, &attributes)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Writes the narrative XHTML unchanged after checking it is a single
    /// well formed `div` element.
    fn write_div(&mut self, xhtml: &str) -> Result<()> {
        check_div(xhtml).map_err(|reason| {
            SerdeError::Custom(format!("Failed to parse XHTML div content: {}", reason))
        })?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(xhtml)))?;
        Ok(())
    }
}

/// An attribute whose value is escaped with [`utils::escape_attribute`].
fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(utils::escape_attribute(value).into_bytes()),
    }
}

/// Accepts exactly one `div` root element, with only whitespace around it.
fn check_div(xhtml: &str) -> std::result::Result<(), String> {
    let mut reader = Reader::from_str(xhtml);
    reader.config_mut().trim_text(true);
    let mut depth = 0usize;
    let mut closed = false;
    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        if let Event::Eof = event {
            break;
        }
        if depth == 0 {
            if closed {
                return Err("content after the div element".to_string());
            }
            let is_div = match &event {
                Event::Start(start) | Event::Empty(start) => {
                    utils::is_div_element(&String::from_utf8_lossy(start.local_name().as_ref()))
                }
                _ => false,
            };
            if !is_div {
                return Err("the root element must be a single div".to_string());
            }
        }
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                closed = depth == 0;
            }
            Event::Empty(_) if depth == 0 => closed = true,
            _ => {}
        }
    }
    if closed {
        Ok(())
    } else {
        Err("missing div element".to_string())
    }
}
