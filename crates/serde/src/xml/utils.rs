//! Naming rules shared by the XML reader and writer.

use serde_json::Value;

/// FHIR namespace URI, declared on the root resource element.
pub const FHIR_NAMESPACE: &str = "http://hl7.org/fhir";

/// Returns the field a `_field` metadata key belongs to.
pub fn metadata_target(key: &str) -> Option<&str> {
    key.strip_prefix('_')
}

/// Resource elements are the only FHIR element names with an upper-case
/// first letter.
pub fn is_resource_name(name: &str) -> bool {
    name.chars()
        .next()
        .map(|c| c.is_ascii_uppercase())
        .unwrap_or(false)
}

/// The narrative `div` holds XHTML and is copied verbatim.
pub fn is_div_element(name: &str) -> bool {
    name == "div"
}

/// Elements whose `url` is written as an attribute.
pub fn is_extension_element(name: &str) -> bool {
    name == "extension" || name == "modifierExtension"
}

/// Lexical form of a JSON scalar for a `value` attribute.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Escapes an attribute value. Tab, carriage return and line feed become
/// character references because XML readers normalize them to spaces.
pub fn escape_attribute(value: &str) -> String {
    let escaped = quick_xml::escape::escape(value);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            c => out.push(c),
        }
    }
    out
}
