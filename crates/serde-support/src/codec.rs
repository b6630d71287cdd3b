//! The `FhirCodec` trait and the field helpers called by `#[derive(FhirSerde)]`.
//!
//! Every model type maps to two JSON fragments:
//!
//! - the **value**: what appears under the element's own key, and
//! - the **meta**: the primitive side channel that appears under `_key`,
//!   carrying `id` and `extension` for primitives.
//!
//! Complex types only ever produce a value. Primitives may produce either or
//! both. Choice types reroute both fragments to a type-suffixed key.

use crate::error::{CodecError, Result};
use crate::single_or_vec::SingleOrVec;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// JSON object type used while encoding and decoding.
pub type Object = Map<String, Value>;

/// A type that knows its FHIR JSON shape.
pub trait FhirCodec: Sized {
    /// Returns the element proper, or `None` when nothing is written under the key.
    fn encode_value(&self) -> Result<Option<Value>>;

    /// Returns the `_key` sibling object, if any.
    fn encode_meta(&self) -> Result<Option<Value>> {
        Ok(None)
    }

    /// Rebuilds the type from its value and sibling fragments.
    fn decode_parts(value: Option<Value>, meta: Option<Value>) -> Result<Self>;

    /// Writes this element into `object` under `name` (and `_name`).
    fn encode_field(&self, name: &str, object: &mut Object) -> Result<()> {
        if let Some(value) = self.encode_value()? {
            object.insert(name.to_string(), value);
        }
        if let Some(meta) = self.encode_meta()? {
            object.insert(meta_key(name), meta);
        }
        Ok(())
    }

    /// Removes and decodes the element stored under `name` (and `_name`).
    fn decode_field(name: &str, object: &mut Object) -> Result<Option<Self>> {
        let value = take(object, name);
        let meta = take(object, &meta_key(name));
        if value.is_none() && meta.is_none() {
            return Ok(None);
        }
        Self::decode_parts(value, meta)
            .map(Some)
            .map_err(|e| e.at(name))
    }
}

/// Implemented by choice enums generated for FHIR `[x]` elements.
pub trait FhirChoice {
    /// Legal type suffixes, in declaration order.
    const TYPES: &'static [&'static str];

    /// Suffix of the active variant.
    fn type_suffix(&self) -> &'static str;
}

/// Implemented by resource types.
pub trait FhirResource {
    const RESOURCE_TYPE: &'static str;

    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }
}

impl<T: FhirCodec> FhirCodec for Box<T> {
    fn encode_value(&self) -> Result<Option<Value>> {
        (**self).encode_value()
    }

    fn encode_meta(&self) -> Result<Option<Value>> {
        (**self).encode_meta()
    }

    fn decode_parts(value: Option<Value>, meta: Option<Value>) -> Result<Self> {
        T::decode_parts(value, meta).map(Box::new)
    }

    fn encode_field(&self, name: &str, object: &mut Object) -> Result<()> {
        (**self).encode_field(name, object)
    }

    fn decode_field(name: &str, object: &mut Object) -> Result<Option<Self>> {
        T::decode_field(name, object).map(|v| v.map(Box::new))
    }
}

// Plain strings: element ids, narrative xhtml. XML hands these over either as
// an attribute (a bare string) or as a `value` carrying element.
impl FhirCodec for String {
    fn encode_value(&self) -> Result<Option<Value>> {
        Ok(Some(Value::String(self.clone())))
    }

    fn decode_parts(value: Option<Value>, _meta: Option<Value>) -> Result<Self> {
        match value {
            Some(Value::String(s)) => Ok(s),
            Some(Value::Object(mut object)) => match take(&mut object, "value") {
                Some(Value::String(s)) => Ok(s),
                other => Err(CodecError::invalid("string", display(other.as_ref()))),
            },
            other => Err(CodecError::invalid("string", display(other.as_ref()))),
        }
    }
}

/// Name of the primitive sibling key for `name`.
pub fn meta_key(name: &str) -> String {
    format!("_{name}")
}

/// Removes `key` from `object`, treating JSON `null` as absent.
pub fn take(object: &mut Object, key: &str) -> Option<Value> {
    object.remove(key).filter(|v| !v.is_null())
}

fn is_present(object: &Object, key: &str) -> bool {
    object.get(key).is_some_and(|v| !v.is_null())
}

fn display(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}

pub fn write_field<T: FhirCodec>(object: &mut Object, name: &str, value: &T) -> Result<()> {
    value.encode_field(name, object)
}

pub fn write_optional<T: FhirCodec>(
    object: &mut Object,
    name: &str,
    value: &Option<T>,
) -> Result<()> {
    match value {
        Some(value) => value.encode_field(name, object),
        None => Ok(()),
    }
}

/// Writes a repeating element as index-aligned `name` / `_name` arrays.
///
/// `name` is written only if some item has a value and `_name` only if some
/// item carries metadata; holes are `null`.
pub fn write_list<T: FhirCodec>(object: &mut Object, name: &str, values: &[T]) -> Result<()> {
    let mut items = Vec::with_capacity(values.len());
    let mut metas = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let item = value.encode_value().map_err(|e| e.at(format!("{name}[{index}]")))?;
        let meta = value.encode_meta().map_err(|e| e.at(format!("{name}[{index}]")))?;
        if item.is_none() && meta.is_none() {
            continue;
        }
        items.push(item.unwrap_or(Value::Null));
        metas.push(meta.unwrap_or(Value::Null));
    }

    if items.iter().any(|v| !v.is_null()) {
        object.insert(name.to_string(), Value::Array(items));
    }
    if metas.iter().any(|v| !v.is_null()) {
        object.insert(meta_key(name), Value::Array(metas));
    }
    Ok(())
}

pub fn write_optional_list<T: FhirCodec>(
    object: &mut Object,
    name: &str,
    values: Option<&[T]>,
) -> Result<()> {
    match values {
        Some(values) => write_list(object, name, values),
        None => Ok(()),
    }
}

pub fn read_optional<T: FhirCodec>(object: &mut Object, name: &str) -> Result<Option<T>> {
    T::decode_field(name, object)
}

pub fn read_required<T: FhirCodec>(object: &mut Object, name: &str) -> Result<T> {
    T::decode_field(name, object)?.ok_or_else(|| CodecError::MissingField(name.to_string()))
}

/// Reads a repeating element, pairing `name[i]` with `_name[i]`.
///
/// Either side may be a single value rather than an array; see [`SingleOrVec`].
pub fn read_list<T: FhirCodec>(object: &mut Object, name: &str) -> Result<Option<Vec<T>>> {
    let values = SingleOrVec::<Option<Value>>::from(take(object, name)).into_vec();
    let metas = SingleOrVec::<Option<Value>>::from(take(object, &meta_key(name))).into_vec();
    let len = values.len().max(metas.len());
    if len == 0 {
        return Ok(None);
    }

    let mut values = values.into_iter();
    let mut metas = metas.into_iter();
    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        let value = values.next().flatten();
        let meta = metas.next().flatten();
        if value.is_none() && meta.is_none() {
            continue;
        }
        let item = T::decode_parts(value, meta).map_err(|e| e.at(format!("{name}[{index}]")))?;
        out.push(item);
    }

    Ok(if out.is_empty() { None } else { Some(out) })
}

pub fn read_required_list<T: FhirCodec>(object: &mut Object, name: &str) -> Result<Vec<T>> {
    read_list(object, name)?.ok_or_else(|| CodecError::MissingField(name.to_string()))
}

/// Finds which variant of the choice element `base` is populated.
///
/// Looks at `base<Suffix>` and `_base<Suffix>` for every suffix in `types`.
/// Returns `None` when no variant is present and fails when more than one is.
pub fn select_choice(
    object: &Object,
    base: &str,
    types: &'static [&'static str],
) -> Result<Option<&'static str>> {
    let present: Vec<&'static str> = types
        .iter()
        .copied()
        .filter(|suffix| {
            let key = format!("{base}{suffix}");
            is_present(object, &key) || is_present(object, &meta_key(&key))
        })
        .collect();

    match present.as_slice() {
        [] => Ok(None),
        [suffix] => Ok(Some(*suffix)),
        _ => Err(CodecError::MultipleChoiceValues {
            field: base.to_string(),
            keys: present.iter().map(|s| format!("{base}{s}")).collect(),
        }),
    }
}

/// Unwraps a JSON object, naming `owner` in the error.
pub fn expect_object(value: Option<Value>, owner: &str) -> Result<Object> {
    match value {
        Some(Value::Object(object)) => Ok(object),
        _ => Err(CodecError::ExpectedObject(owner.to_string())),
    }
}

/// Consumes `resourceType` and checks it against `expected`.
///
/// A missing `resourceType` is accepted because the caller already chose the type.
pub fn check_resource_type(object: &mut Object, expected: &'static str) -> Result<()> {
    match take(object, "resourceType") {
        None => Ok(()),
        Some(Value::String(found)) if found == expected => Ok(()),
        Some(Value::String(found)) => Err(CodecError::ResourceTypeMismatch { expected, found }),
        Some(other) => Err(CodecError::ResourceTypeMismatch {
            expected,
            found: other.to_string(),
        }),
    }
}

/// Serializes a [`FhirCodec`] through any serde serializer.
pub fn serialize_with<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: FhirCodec,
    S: Serializer,
{
    match value.encode_value().map_err(S::Error::custom)? {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// Deserializes a [`FhirCodec`] by buffering the input as a JSON value.
pub fn deserialize_with<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: FhirCodec,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::decode_parts(Some(value), None).map_err(D::Error::custom)
}
