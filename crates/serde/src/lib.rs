//! # Meridian serialization
//!
//! JSON and XML codecs for the Meridian FHIR model.
//!
//! - **JSON**: thin wrappers around `serde_json`; the model types implement
//!   the FHIR JSON mapping themselves through `#[derive(FhirSerde)]`.
//! - **XML** (feature `xml`, on by default): a quick-xml writer and reader that
//!   map between FHIR XML and the FHIR JSON value of a resource.
//! - **Format**: detection from file extensions, media types and content, and
//!   conversion of any R4 resource between the two formats.
//!
//! ## Examples
//!
//! ```ignore
//! use meridian_serde::{Format, convert, from_json_str, to_json_string};
//! use meridian_fhir::r4::Patient;
//!
//! let patient: Patient = from_json_str(r#"{"resourceType":"Patient","active":true}"#)?;
//! let json = to_json_string(&patient)?;
//!
//! let xml = convert(&json, Format::Json, Format::Xml, true)?;
//! ```

pub mod error;
#[cfg(feature = "R4")]
pub mod format;
pub mod json;
#[cfg(feature = "xml")]
pub mod xml;

pub use error::{Result, SerdeError};
#[cfg(feature = "R4")]
pub use format::{Format, convert, parse_resource, write_resource};
pub use json::{
    from_json_reader, from_json_slice, from_json_str, from_json_value, to_json_string,
    to_json_string_pretty, to_json_value, to_json_vec, to_json_writer,
};
#[cfg(feature = "xml")]
pub use xml::{
    from_xml_reader, from_xml_slice, from_xml_str, to_xml_string, to_xml_string_pretty,
    to_xml_vec, to_xml_writer,
};
