use super::*;
use meridian_fhir_macro::FhirSerde;

/// Describes a graph of resources reachable from a `start` resource type by
/// following links.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource = "GraphDefinition")]
pub struct GraphDefinition {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub version: Option<String>,
    pub name: String,
    pub status: Code,
    pub experimental: Option<Boolean>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub start: Code,
    pub profile: Option<Canonical>,
    pub link: Option<Vec<GraphDefinitionLink>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct GraphDefinitionLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub slice_name: Option<String>,
    pub min: Option<Integer>,
    pub max: Option<String>,
    pub description: Option<String>,
    pub target: Option<Vec<GraphDefinitionLinkTarget>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct GraphDefinitionLinkTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub params: Option<String>,
    pub profile: Option<Canonical>,
    pub compartment: Option<Vec<GraphDefinitionLinkTargetCompartment>>,
    /// Links followed from this target.
    pub link: Option<Vec<GraphDefinitionLink>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct GraphDefinitionLinkTargetCompartment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#use: Code,
    pub code: Code,
    pub rule: Code,
    pub expression: Option<String>,
    pub description: Option<String>,
}
