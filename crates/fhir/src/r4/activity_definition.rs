use super::*;
use meridian_fhir_macro::FhirSerde;

/// A shareable definition of an action: what should be ordered or performed,
/// independent of any specific patient.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource = "ActivityDefinition")]
pub struct ActivityDefinition {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub identifier: Option<Vec<Identifier>>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub status: Code,
    pub experimental: Option<Boolean>,
    pub subject: Option<ActivityDefinitionSubject>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub usage: Option<String>,
    pub copyright: Option<Markdown>,
    pub approval_date: Option<Date>,
    pub last_review_date: Option<Date>,
    pub effective_period: Option<Period>,
    pub topic: Option<Vec<CodeableConcept>>,
    pub author: Option<Vec<ContactDetail>>,
    pub editor: Option<Vec<ContactDetail>>,
    pub reviewer: Option<Vec<ContactDetail>>,
    pub endorser: Option<Vec<ContactDetail>>,
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    pub library: Option<Vec<Canonical>>,
    pub kind: Option<Code>,
    pub profile: Option<Canonical>,
    pub code: Option<CodeableConcept>,
    pub intent: Option<Code>,
    pub priority: Option<Code>,
    pub do_not_perform: Option<Boolean>,
    pub timing: Option<ActivityDefinitionTiming>,
    pub location: Option<Reference>,
    pub participant: Option<Vec<ActivityDefinitionParticipant>>,
    pub product: Option<ActivityDefinitionProduct>,
    pub quantity: Option<SimpleQuantity>,
    pub dosage: Option<Vec<Dosage>>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub specimen_requirement: Option<Vec<Reference>>,
    pub observation_requirement: Option<Vec<Reference>>,
    pub observation_result_requirement: Option<Vec<Reference>>,
    pub transform: Option<Canonical>,
    pub dynamic_value: Option<Vec<ActivityDefinitionDynamicValue>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ActivityDefinitionSubject {
    CodeableConcept(Box<CodeableConcept>),
    Reference(Box<Reference>),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ActivityDefinitionTiming {
    Timing(Box<Timing>),
    DateTime(DateTime),
    Age(Box<Age>),
    Period(Box<Period>),
    Range(Box<Range>),
    Duration(Box<Duration>),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ActivityDefinitionProduct {
    Reference(Box<Reference>),
    CodeableConcept(Box<CodeableConcept>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ActivityDefinitionParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub role: Option<CodeableConcept>,
}

/// A value to set on the produced resource, computed from `expression`.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ActivityDefinitionDynamicValue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub path: String,
    pub expression: Expression,
}
