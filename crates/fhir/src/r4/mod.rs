//! FHIR R4 (4.0.1) model.
//!
//! Primitive types are aliases of [`Element`](crate::Element) over the value
//! type they carry. Note that [`String`] here is the FHIR `string` primitive;
//! plain Rust strings are spelled `std::string::String` in this module.
//!
//! Choice elements (`value[x]`) are enums named after their owner and field,
//! e.g. [`ObservationValue`] or [`PlanDefinitionActionTiming`].

use crate::element::{Element, PositiveIntValue, UnsignedIntValue};
use crate::precision::{
    PreciseDecimal, PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime,
};

mod activity_definition;
mod bundle;
mod datatypes;
mod dosage;
mod effect_evidence_synthesis;
mod extension;
mod graph_definition;
mod metadata;
mod observation;
mod patient;
mod plan_definition;
mod resource;
mod risk_evidence_synthesis;
mod timing;

pub use activity_definition::*;
pub use bundle::*;
pub use datatypes::*;
pub use dosage::*;
pub use effect_evidence_synthesis::*;
pub use extension::*;
pub use graph_definition::*;
pub use metadata::*;
pub use observation::*;
pub use patient::*;
pub use plan_definition::*;
pub use resource::*;
pub use risk_evidence_synthesis::*;
pub use timing::*;

pub type Boolean = Element<bool, Extension>;
pub type Integer = Element<i32, Extension>;
pub type PositiveInt = Element<PositiveIntValue, Extension>;
pub type UnsignedInt = Element<UnsignedIntValue, Extension>;
pub type Decimal = Element<PreciseDecimal, Extension>;

pub type String = Element<std::string::String, Extension>;
pub type Code = Element<std::string::String, Extension>;
pub type Id = Element<std::string::String, Extension>;
pub type Markdown = Element<std::string::String, Extension>;
pub type Uri = Element<std::string::String, Extension>;
pub type Url = Element<std::string::String, Extension>;
pub type Canonical = Element<std::string::String, Extension>;
pub type Oid = Element<std::string::String, Extension>;
pub type Uuid = Element<std::string::String, Extension>;
pub type Base64Binary = Element<std::string::String, Extension>;

pub type Date = Element<PrecisionDate, Extension>;
pub type DateTime = Element<PrecisionDateTime, Extension>;
pub type Instant = Element<PrecisionInstant, Extension>;
pub type Time = Element<PrecisionTime, Extension>;
