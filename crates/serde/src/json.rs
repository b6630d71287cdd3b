//! FHIR JSON.
//!
//! The model types carry their own FHIR JSON mapping through `FhirSerde`, so
//! these are thin wrappers over `serde_json` that report
//! [`SerdeError`](crate::SerdeError).

use crate::error::Result;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::io::{Read, Write};

/// Deserialize a FHIR resource from a JSON string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::json::from_json_str;
/// use meridian_fhir::r4::Patient;
///
/// let json = r#"{"resourceType":"Patient","id":"example"}"#;
/// let patient: Patient = from_json_str(json)?;
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Deserialize a FHIR resource from JSON bytes.
pub fn from_json_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(v)?)
}

/// Deserialize a FHIR resource from a `serde_json::Value`.
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

/// Deserialize a FHIR resource from a byte stream.
pub fn from_json_reader<R, T>(reader: R) -> Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize a FHIR resource to a compact JSON string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::json::to_json_string;
/// use meridian_fhir::r4::Patient;
///
/// let patient = Patient::default();
/// let json = to_json_string(&patient)?;
/// assert!(json.starts_with(r#"{"resourceType":"Patient""#));
/// ```
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize a FHIR resource to an indented JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a FHIR resource to JSON bytes.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a FHIR resource to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Serialize a FHIR resource into a byte sink, optionally indented.
pub fn to_json_writer<W, T>(writer: W, value: &T, pretty: bool) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
