//! Format detection and conversion between FHIR JSON and FHIR XML.

use crate::error::{Result, SerdeError};
use crate::json;
use meridian_fhir::FhirCodec;
use meridian_fhir::r4::Resource;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A FHIR wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Detects the format from a file extension (`.json`, `.xml`).
    pub fn from_path(path: &Path) -> Option<Format> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else if extension.eq_ignore_ascii_case("xml") {
            Some(Format::Xml)
        } else {
            None
        }
    }

    /// Detects the format from a media type such as `application/fhir+json`
    /// or `text/xml; charset=utf-8`. The `_format` shorthands `json` and
    /// `xml` are accepted as well.
    pub fn from_mime_type(mime: &str) -> Option<Format> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "json" | "application/json" | "application/fhir+json" | "application/json+fhir" => {
                Some(Format::Json)
            }
            "xml" | "text/xml" | "application/xml" | "application/fhir+xml"
            | "application/xml+fhir" => Some(Format::Xml),
            _ => None,
        }
    }

    /// Guesses the format from the first significant character of a
    /// document.
    pub fn sniff(content: &str) -> Option<Format> {
        match content.trim_start_matches('\u{feff}').trim_start().chars().next()? {
            '{' => Some(Format::Json),
            '<' => Some(Format::Xml),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/fhir+json",
            Format::Xml => "application/fhir+xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = SerdeError;

    fn from_str(s: &str) -> Result<Self> {
        Format::from_mime_type(s).ok_or_else(|| SerdeError::UnsupportedFormat(s.to_string()))
    }
}

/// Parses any R4 resource in the given format.
///
/// Syntax errors are reported as [`SerdeError::Json`] or [`SerdeError::Xml`];
/// content that does not fit the model as [`SerdeError::Codec`].
pub fn parse_resource(input: &str, format: Format) -> Result<Resource> {
    match format {
        Format::Json => {
            let value: serde_json::Value = json::from_json_str(input)?;
            Ok(Resource::decode_parts(Some(value), None)?)
        }
        #[cfg(feature = "xml")]
        Format::Xml => crate::xml::from_xml_str(input),
        #[cfg(not(feature = "xml"))]
        Format::Xml => Err(xml_disabled()),
    }
}

/// Writes a resource in the given format.
pub fn write_resource(resource: &Resource, format: Format, pretty: bool) -> Result<String> {
    match (format, pretty) {
        (Format::Json, false) => json::to_json_string(resource),
        (Format::Json, true) => json::to_json_string_pretty(resource),
        #[cfg(feature = "xml")]
        (Format::Xml, false) => crate::xml::to_xml_string(resource),
        #[cfg(feature = "xml")]
        (Format::Xml, true) => crate::xml::to_xml_string_pretty(resource),
        #[cfg(not(feature = "xml"))]
        (Format::Xml, _) => Err(xml_disabled()),
    }
}

/// Re-encodes a resource from one format into another.
pub fn convert(input: &str, from: Format, to: Format, pretty: bool) -> Result<String> {
    let resource = parse_resource(input, from)?;
    debug!(
        resource_type = resource.resource_type(),
        id = resource.id(),
        %from,
        %to,
        "converting resource"
    );
    let output = write_resource(&resource, to, pretty)?;
    debug!(bytes = output.len(), "conversion finished");
    Ok(output)
}

#[cfg(not(feature = "xml"))]
fn xml_disabled() -> SerdeError {
    SerdeError::UnsupportedFormat("xml (the `xml` feature is disabled)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(Format::from_path(Path::new("patient.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("dir/bundle.XML")), Some(Format::Xml));
        assert_eq!(Format::from_path(Path::new("notes.txt")), None);
        assert_eq!(
            Format::from_mime_type("application/fhir+json; fhirVersion=4.0"),
            Some(Format::Json)
        );
        assert_eq!(Format::from_mime_type("text/xml"), Some(Format::Xml));
        assert_eq!(Format::from_mime_type("text/turtle"), None);
        assert_eq!(Format::sniff("  \n{\"resourceType\":1}"), Some(Format::Json));
        assert_eq!(Format::sniff("<?xml version=\"1.0\"?>"), Some(Format::Xml));
        assert_eq!(Format::sniff(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("application/fhir+xml".parse::<Format>().unwrap(), Format::Xml);
        assert!(matches!(
            "yaml".parse::<Format>(),
            Err(SerdeError::UnsupportedFormat(name)) if name == "yaml"
        ));
        assert_eq!(Format::Xml.to_string(), "xml");
        assert_eq!(Format::Json.mime_type(), "application/fhir+json");
    }

    #[test]
    fn test_json_to_json_normalises() {
        let output = convert(
            r#"{ "active": true, "resourceType": "Patient" }"#,
            Format::Json,
            Format::Json,
            false,
        )
        .unwrap();
        assert_eq!(output, r#"{"resourceType":"Patient","active":true}"#);
    }

    #[cfg(feature = "xml")]
    #[test]
    fn test_json_to_xml_and_back() {
        let json = r#"{"resourceType":"Patient","id":"p1","gender":"female","birthDate":"1974-12-25"}"#;
        let xml = convert(json, Format::Json, Format::Xml, false).unwrap();
        assert!(xml.contains(r#"<Patient xmlns="http://hl7.org/fhir">"#), "{}", xml);
        assert!(xml.contains(r#"<birthDate value="1974-12-25"/>"#), "{}", xml);
        assert_eq!(convert(&xml, Format::Xml, Format::Json, false).unwrap(), json);
    }

    #[test]
    fn test_unknown_resource_type_fails() {
        let err = convert(r#"{"resourceType":"Medication"}"#, Format::Json, Format::Json, false)
            .unwrap_err();
        assert!(err.to_string().contains("Medication"), "{}", err);
        assert!(err.codec_error().is_some());
    }

    #[test]
    fn test_syntax_errors_are_not_codec_errors() {
        let err = parse_resource(r#"{"resourceType":"#, Format::Json).unwrap_err();
        assert!(matches!(err, SerdeError::Json(_)));
        assert!(err.codec_error().is_none());
    }
}
