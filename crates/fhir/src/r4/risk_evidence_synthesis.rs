use super::*;
use meridian_fhir_macro::FhirSerde;

/// Combined results of studies estimating the risk of an outcome in a
/// population, optionally for an exposure.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource = "RiskEvidenceSynthesis")]
pub struct RiskEvidenceSynthesis {
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
    pub status: Code,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub note: Option<Vec<Annotation>>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
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
    pub synthesis_type: Option<CodeableConcept>,
    pub study_type: Option<CodeableConcept>,
    pub population: Reference,
    pub exposure: Option<Reference>,
    pub outcome: Reference,
    pub sample_size: Option<RiskEvidenceSynthesisSampleSize>,
    pub risk_estimate: Option<RiskEvidenceSynthesisRiskEstimate>,
    pub certainty: Option<Vec<RiskEvidenceSynthesisCertainty>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskEvidenceSynthesisSampleSize {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub number_of_studies: Option<Integer>,
    pub number_of_participants: Option<Integer>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskEvidenceSynthesisRiskEstimate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub r#type: Option<CodeableConcept>,
    pub value: Option<Decimal>,
    pub unit_of_measure: Option<CodeableConcept>,
    pub denominator_count: Option<Integer>,
    pub numerator_count: Option<Integer>,
    pub precision_estimate: Option<Vec<RiskEvidenceSynthesisRiskEstimatePrecisionEstimate>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskEvidenceSynthesisRiskEstimatePrecisionEstimate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub level: Option<Decimal>,
    pub from: Option<Decimal>,
    pub to: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskEvidenceSynthesisCertainty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub rating: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub certainty_subcomponent: Option<Vec<RiskEvidenceSynthesisCertaintyCertaintySubcomponent>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskEvidenceSynthesisCertaintyCertaintySubcomponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub rating: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
}
