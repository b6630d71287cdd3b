//! Metadata types used by knowledge artifacts (definitions, evidence).

use super::*;
use meridian_fhir_macro::FhirSerde;

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub name: Option<String>,
    pub telecom: Option<Vec<ContactPoint>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Contributor {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub name: String,
    pub contact: Option<Vec<ContactDetail>>,
}

/// The context that an artifact is intended for, e.g. a gender or age focus.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct UsageContext {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub code: Coding,
    pub value: UsageContextValue,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum UsageContextValue {
    CodeableConcept(Box<CodeableConcept>),
    Quantity(Box<Quantity>),
    Range(Box<Range>),
    Reference(Box<Reference>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RelatedArtifact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub label: Option<String>,
    pub display: Option<String>,
    pub citation: Option<Markdown>,
    pub url: Option<Url>,
    pub document: Option<Attachment>,
    pub resource: Option<Canonical>,
}

/// Describes the data a knowledge artifact needs, by type and filters.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirement {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub profile: Option<Vec<Canonical>>,
    pub subject: Option<DataRequirementSubject>,
    pub must_support: Option<Vec<String>>,
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
    pub limit: Option<PositiveInt>,
    pub sort: Option<Vec<DataRequirementSort>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DataRequirementSubject {
    CodeableConcept(Box<CodeableConcept>),
    Reference(Box<Reference>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementCodeFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub search_param: Option<String>,
    pub value_set: Option<Canonical>,
    pub code: Option<Vec<Coding>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementDateFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub search_param: Option<String>,
    pub value: Option<DataRequirementDateFilterValue>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DataRequirementDateFilterValue {
    DateTime(DateTime),
    Period(Box<Period>),
    Duration(Box<Duration>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DataRequirementSort {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: String,
    pub direction: Code,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ParameterDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub name: Option<Code>,
    pub r#use: Code,
    pub min: Option<Integer>,
    pub max: Option<String>,
    pub documentation: Option<String>,
    pub r#type: Code,
    pub profile: Option<Canonical>,
}

/// An expression in a named language (`text/cql`, `text/fhirpath`, ...).
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Expression {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub name: Option<Id>,
    pub language: Code,
    pub expression: Option<String>,
    pub reference: Option<Uri>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TriggerDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub name: Option<String>,
    pub timing: Option<TriggerDefinitionTiming>,
    pub data: Option<Vec<DataRequirement>>,
    pub condition: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum TriggerDefinitionTiming {
    Timing(Box<Timing>),
    Reference(Box<Reference>),
    Date(Date),
    DateTime(DateTime),
}
