//! # Meridian FHIR model
//!
//! Strongly-typed Rust representations of FHIR data types and resources.
//!
//! The version-independent building blocks live at the crate root:
//!
//! - [`Element`]: a primitive value together with its `id` and `extension`
//!   side channel (`_field` in FHIR JSON).
//! - [`PreciseDecimal`] and the `Precision*` date/time types, which keep the
//!   lexical form of the value so it survives a round trip.
//!
//! Each FHIR version is a feature-gated module; only R4 is provided:
//!
//! ```ignore
//! use meridian_fhir::r4::{Patient, Resource};
//!
//! let resource: Resource = serde_json::from_str(json)?;
//! let patient: Patient = serde_json::from_str(json)?;
//! ```
//!
//! Every model type implements [`FhirCodec`] through `#[derive(FhirSerde)]`,
//! along with `serde::Serialize` and `serde::Deserialize`, so any serde
//! format sees the FHIR JSON shape.

mod element;
mod precision;

#[cfg(feature = "R4")]
pub mod r4;

pub use element::{DecimalElement, Element, PositiveIntValue, PrimitiveValue, UnsignedIntValue};
pub use precision::{
    DatePrecision, PreciseDecimal, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime,
};

pub use meridian_fhir_macro::FhirSerde;
pub use meridian_serde_support::{CodecError, FhirChoice, FhirCodec, FhirResource};
