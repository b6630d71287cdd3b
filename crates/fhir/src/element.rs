//! The primitive element wrapper shared by every FHIR version.
//!
//! A FHIR primitive is a value plus optional `id` and `extension`. In JSON
//! the value sits under the element's key and the rest under `_key`:
//!
//! ```json
//! "birthDate": "1970-03-30",
//! "_birthDate": { "id": "bd1", "extension": [ ... ] }
//! ```
//!
//! Either half may be missing. The XML codec hands primitives over as a single
//! object (`{ "value": .., "id": .., "extension": [..] }`), which is accepted
//! in place of the scalar.

use crate::precision::{
    PreciseDecimal, PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime,
};
use meridian_serde_support::{
    CodecError, FhirCodec, Object, Result, expect_object, read_list, read_optional, take,
    write_optional_list,
};
use serde_json::Value;

/// A primitive value with its element id and extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<V, E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<V>,
}

/// Primitive element holding a [`PreciseDecimal`].
pub type DecimalElement<E> = Element<PreciseDecimal, E>;

impl<V, E> Element<V, E> {
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || self.extension.as_ref().is_some_and(|e| !e.is_empty())
    }
}

impl<E> Element<PreciseDecimal, E> {
    /// Wraps a decimal, using its canonical text as the lexical form.
    pub fn new(value: rust_decimal::Decimal) -> Self {
        PreciseDecimal::from(value).into()
    }
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Self {
            id: None,
            extension: None,
            value: Some(value),
        }
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

/// Value types that can sit inside an [`Element`].
pub trait PrimitiveValue: Sized {
    fn to_json(&self) -> Result<Value>;
    fn from_json(value: Value) -> Result<Self>;
}

impl PrimitiveValue for String {
    fn to_json(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(CodecError::invalid("string", other)),
        }
    }
}

impl PrimitiveValue for bool {
    fn to_json(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            other => Err(CodecError::invalid("boolean", other)),
        }
    }
}

fn integer_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

impl PrimitiveValue for i32 {
    fn to_json(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }

    fn from_json(value: Value) -> Result<Self> {
        integer_text(&value)
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| CodecError::invalid("integer", value))
    }
}

macro_rules! bounded_integer {
    ($(#[$doc:meta])* $name:ident, $min:literal, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub const MIN: u32 = $min;
            pub const MAX: u32 = i32::MAX as u32;

            /// `None` when `value` is outside the range of the FHIR type.
            pub fn new(value: u32) -> Option<Self> {
                (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl PrimitiveValue for $name {
            fn to_json(&self) -> Result<Value> {
                Ok(Value::from(self.0))
            }

            fn from_json(value: Value) -> Result<Self> {
                integer_text(&value)
                    .and_then(|text| text.parse().ok())
                    .and_then(Self::new)
                    .ok_or_else(|| CodecError::invalid($kind, value))
            }
        }
    };
}

bounded_integer!(
    /// Value of a FHIR `positiveInt`: 1 to 2147483647.
    PositiveIntValue,
    1,
    "positiveInt"
);
bounded_integer!(
    /// Value of a FHIR `unsignedInt`: 0 to 2147483647.
    UnsignedIntValue,
    0,
    "unsignedInt"
);

impl PrimitiveValue for PreciseDecimal {
    fn to_json(&self) -> Result<Value> {
        // The number is re-read from its text so the digits go out unchanged.
        let value: Value = serde_json::from_str(self.original())?;
        match value {
            Value::Number(_) => Ok(value),
            other => Err(CodecError::invalid("decimal", other)),
        }
    }

    fn from_json(value: Value) -> Result<Self> {
        let parsed = match &value {
            Value::Number(n) => PreciseDecimal::parse(&n.to_string()),
            Value::String(s) => PreciseDecimal::parse(s),
            _ => None,
        };
        parsed.ok_or_else(|| CodecError::invalid("decimal", value))
    }
}

macro_rules! textual_primitive {
    ($ty:ty, $kind:literal) => {
        impl PrimitiveValue for $ty {
            fn to_json(&self) -> Result<Value> {
                Ok(Value::String(self.to_string()))
            }

            fn from_json(value: Value) -> Result<Self> {
                let parsed = match &value {
                    Value::String(s) => <$ty>::parse(s),
                    _ => None,
                };
                parsed.ok_or_else(|| CodecError::invalid($kind, value))
            }
        }
    };
}

textual_primitive!(PrecisionDate, "date");
textual_primitive!(PrecisionDateTime, "dateTime");
textual_primitive!(PrecisionInstant, "instant");
textual_primitive!(PrecisionTime, "time");

impl<V, E> FhirCodec for Element<V, E>
where
    V: PrimitiveValue,
    E: FhirCodec,
{
    fn encode_value(&self) -> Result<Option<Value>> {
        self.value.as_ref().map(PrimitiveValue::to_json).transpose()
    }

    fn encode_meta(&self) -> Result<Option<Value>> {
        if !self.has_metadata() {
            return Ok(None);
        }
        let mut object = Object::new();
        if let Some(id) = &self.id {
            object.insert("id".to_string(), Value::String(id.clone()));
        }
        write_optional_list(&mut object, "extension", self.extension.as_deref())?;
        Ok(Some(Value::Object(object)))
    }

    fn decode_parts(value: Option<Value>, meta: Option<Value>) -> Result<Self> {
        let mut element = Element::default();

        match value {
            Some(Value::Object(mut object)) => {
                element.id = read_optional(&mut object, "id")?;
                element.extension = read_list(&mut object, "extension")?;
                element.value = take(&mut object, "value")
                    .map(V::from_json)
                    .transpose()?;
            }
            Some(value) => element.value = Some(V::from_json(value)?),
            None => {}
        }

        if meta.is_some() {
            let mut object = expect_object(meta, "primitive element metadata")?;
            if let Some(id) = read_optional(&mut object, "id")? {
                element.id = Some(id);
            }
            if let Some(extension) = read_list(&mut object, "extension")? {
                element.extension = Some(extension);
            }
        }

        Ok(element)
    }
}
