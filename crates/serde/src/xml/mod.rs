//! FHIR XML serialization and deserialization.
//!
//! Both directions go through the FHIR JSON value of a resource. The writer
//! turns the JSON shape into XML events; the reader builds an XML-shaped
//! JSON value that the model codecs accept alongside regular FHIR JSON.
//!
//! ## FHIR JSON ↔ XML Mapping
//!
//! ### Simple Primitives
//!
//! ```json
//! { "active": true }
//! ```
//!
//! ```xml
//! <active value="true"/>
//! ```
//!
//! ### Primitives with Extensions
//!
//! ```json
//! {
//!   "birthDate": "1974-12-25",
//!   "_birthDate": { "id": "bd1", "extension": [...] }
//! }
//! ```
//!
//! ```xml
//! <birthDate id="bd1" value="1974-12-25">
//!   <extension url="...">...</extension>
//! </birthDate>
//! ```
//!
//! ### Arrays with Extensions
//!
//! ```json
//! {
//!   "given": ["Alice", null],
//!   "_given": [null, {"id": "g1"}]
//! }
//! ```
//!
//! ```xml
//! <given value="Alice"/>
//! <given id="g1"/>
//! ```
//!
//! ### Choice Elements
//!
//! The type-suffixed name is the element name in both formats:
//! `"valueQuantity": {..}` is `<valueQuantity>..</valueQuantity>`.
//!
//! ### Nested Resources
//!
//! ```xml
//! <contained>
//!   <Patient>...</Patient>
//! </contained>
//! ```
//!
//! The narrative `div` is XHTML and is copied verbatim both ways.

mod de;
mod ser;
mod utils;

pub use de::{from_xml_reader, from_xml_slice, from_xml_str};
pub use ser::{to_xml_string, to_xml_string_pretty, to_xml_vec, to_xml_writer};
pub use utils::FHIR_NAMESPACE;
