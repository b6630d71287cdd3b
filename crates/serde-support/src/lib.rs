//! Shared codec machinery for the Meridian FHIR model.
//!
//! The model crates derive [`FhirCodec`] through `#[derive(FhirSerde)]`; the
//! generated code calls the field helpers in [`codec`] and reports problems as
//! [`CodecError`]. `serde` and `serde_json` are re-exported so generated code
//! resolves them through this crate.

pub mod codec;
pub mod error;
mod single_or_vec;

pub use codec::{
    FhirChoice, FhirCodec, FhirResource, Object, check_resource_type, deserialize_with,
    expect_object, meta_key, read_list, read_optional, read_required, read_required_list,
    select_choice, serialize_with, take, write_field, write_list, write_optional,
    write_optional_list,
};
pub use error::{CodecError, Result};
pub use single_or_vec::SingleOrVec;

pub use serde;
pub use serde_json;
