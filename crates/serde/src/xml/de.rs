//! FHIR XML reader.
//!
//! The document is read into the XML-shaped JSON value the model codecs
//! accept: every element becomes an object of its attributes and children,
//! so `<birthDate id="b" value="1974"/>` reads as
//! `{"id": "b", "value": "1974"}`. Repeated children become arrays, and a
//! wrapper such as `<contained>` takes the value of the resource inside it.

use super::utils;
use crate::error::{Result, SerdeError};
use meridian_serde_support::{FhirCodec, Object};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::Value;
use std::io::Read;

/// Deserialize a FHIR resource from an XML string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::xml::from_xml_str;
/// use meridian_fhir::r4::Patient;
///
/// let xml = r#"<?xml version="1.0"?>
/// <Patient xmlns="http://hl7.org/fhir">
///   <id value="example"/>
/// </Patient>"#;
/// let patient: Patient = from_xml_str(xml)?;
/// ```
pub fn from_xml_str<T: FhirCodec>(xml: &str) -> Result<T> {
    let value = XmlReader::new(xml).read_document()?;
    Ok(T::decode_parts(Some(value), None)?)
}

/// Deserialize a FHIR resource from XML bytes.
pub fn from_xml_slice<T: FhirCodec>(xml: &[u8]) -> Result<T> {
    let xml_str = std::str::from_utf8(xml)
        .map_err(|e| SerdeError::Custom(format!("Invalid UTF-8: {}", e)))?;
    from_xml_str(xml_str)
}

/// Deserialize a FHIR resource from a byte stream.
pub fn from_xml_reader<R: Read, T: FhirCodec>(mut reader: R) -> Result<T> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    from_xml_str(&xml)
}

/// Element nesting accepted before the document is rejected, the same bound
/// serde_json puts on JSON input.
const MAX_DEPTH: usize = 128;

struct XmlReader<'a> {
    input: &'a str,
    reader: Reader<&'a [u8]>,
    depth: usize,
}

impl<'a> XmlReader<'a> {
    fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);
        XmlReader {
            input,
            reader,
            depth: 0,
        }
    }

    fn read_document(&mut self) -> Result<Value> {
        loop {
            match self.reader.read_event()? {
                Event::Start(start) => return self.read_resource(&start, false),
                Event::Empty(start) => return self.read_resource(&start, true),
                Event::Eof => {
                    return Err(SerdeError::Custom(
                        "XML document has no root element".to_string(),
                    ));
                }
                // declaration, comments, processing instructions
                _ => {}
            }
        }
    }

    /// Reads `<ResourceType>..</ResourceType>` into an object whose
    /// `resourceType` is the element name.
    fn read_resource(&mut self, start: &BytesStart<'a>, empty: bool) -> Result<Value> {
        let name = element_name(start)?;
        if !utils::is_resource_name(&name) {
            return Err(SerdeError::Custom(format!(
                "`{}` is not a FHIR resource element",
                name
            )));
        }

        let mut object = Object::new();
        object.insert("resourceType".to_string(), Value::String(name.clone()));
        self.read_attributes(start, &mut object)?;
        if !empty && self.read_nested(&mut object)?.is_some() {
            return Err(SerdeError::Custom(format!(
                "resource `{}` directly contains another resource",
                name
            )));
        }
        Ok(Value::Object(object))
    }

    fn read_element(&mut self, start: &BytesStart<'a>, empty: bool) -> Result<Value> {
        let mut object = Object::new();
        self.read_attributes(start, &mut object)?;
        if empty {
            return Ok(Value::Object(object));
        }
        match self.read_nested(&mut object)? {
            Some(resource) => Ok(resource),
            None => Ok(Value::Object(object)),
        }
    }

    fn read_nested(&mut self, object: &mut Object) -> Result<Option<Value>> {
        if self.depth >= MAX_DEPTH {
            return Err(SerdeError::Custom(format!(
                "XML nesting exceeds {} elements at position {}",
                MAX_DEPTH,
                self.reader.buffer_position()
            )));
        }
        self.depth += 1;
        let children = self.read_children(object);
        self.depth -= 1;
        children
    }

    /// Reads children up to the parent's end tag. Returns the resource when
    /// the parent is only a wrapper around one.
    fn read_children(&mut self, object: &mut Object) -> Result<Option<Value>> {
        let mut wrapped = None;
        loop {
            let position = self.reader.buffer_position() as usize;
            let (start, empty) = match self.reader.read_event()? {
                Event::Start(start) => (start, false),
                Event::Empty(start) => (start, true),
                Event::End(_) => return Ok(wrapped),
                Event::Eof => {
                    return Err(SerdeError::Custom(
                        "unexpected end of XML document".to_string(),
                    ));
                }
                // text outside div carries nothing in FHIR XML
                _ => continue,
            };

            let name = element_name(&start)?;
            if utils::is_div_element(&name) {
                let xhtml = self.read_div(&start, position, empty)?;
                insert_child(object, name, xhtml);
            } else if utils::is_resource_name(&name) {
                wrapped = Some(self.read_resource(&start, empty)?);
            } else {
                let child = self.read_element(&start, empty)?;
                insert_child(object, name, child);
            }
        }
    }

    /// Captures the `div` element exactly as it appears in the input.
    fn read_div(&mut self, start: &BytesStart<'a>, position: usize, empty: bool) -> Result<Value> {
        if !empty {
            self.reader.read_to_end(start.name())?;
        }
        let end = self.reader.buffer_position() as usize;
        let xhtml = self.input.get(position..end).ok_or_else(|| {
            SerdeError::Custom("div element does not fall on character boundaries".to_string())
        })?;
        Ok(Value::String(xhtml.trim().to_string()))
    }

    fn read_attributes(&self, start: &BytesStart<'a>, object: &mut Object) -> Result<()> {
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| SerdeError::Custom(format!("Invalid UTF-8: {}", e)))?;
            // namespace declarations and prefixed attributes such as xsi:schemaLocation
            if key.starts_with("xmlns") || key.contains(':') {
                continue;
            }
            let value = attr
                .decode_and_unescape_value(self.reader.decoder())
                .map_err(quick_xml::Error::from)?;
            object.insert(key.to_string(), Value::String(value.into_owned()));
        }
        Ok(())
    }
}

fn element_name(start: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| SerdeError::Custom(format!("Invalid UTF-8: {}", e)))
}

/// A second child with the same name turns the member into an array.
fn insert_child(object: &mut Object, name: String, value: Value) {
    match object.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            object.insert(name, value);
        }
    }
}
