use super::*;
use meridian_fhir_macro::FhirSerde;

/// Combined results of studies comparing an exposure with an alternative for
/// a population and outcome.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource = "EffectEvidenceSynthesis")]
pub struct EffectEvidenceSynthesis {
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
    pub exposure: Reference,
    pub exposure_alternative: Reference,
    pub outcome: Reference,
    pub sample_size: Option<EffectEvidenceSynthesisSampleSize>,
    pub results_by_exposure: Option<Vec<EffectEvidenceSynthesisResultsByExposure>>,
    pub effect_estimate: Option<Vec<EffectEvidenceSynthesisEffectEstimate>>,
    pub certainty: Option<Vec<EffectEvidenceSynthesisCertainty>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisSampleSize {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub number_of_studies: Option<Integer>,
    pub number_of_participants: Option<Integer>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisResultsByExposure {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub exposure_state: Option<Code>,
    pub variant_state: Option<CodeableConcept>,
    pub risk_evidence_synthesis: Reference,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisEffectEstimate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub r#type: Option<CodeableConcept>,
    pub variant_state: Option<CodeableConcept>,
    pub value: Option<Decimal>,
    pub unit_of_measure: Option<CodeableConcept>,
    pub precision_estimate: Option<Vec<EffectEvidenceSynthesisEffectEstimatePrecisionEstimate>>,
}

/// A confidence or credible interval around an estimate.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisEffectEstimatePrecisionEstimate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub level: Option<Decimal>,
    pub from: Option<Decimal>,
    pub to: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisCertainty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub rating: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub certainty_subcomponent: Option<Vec<EffectEvidenceSynthesisCertaintyCertaintySubcomponent>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EffectEvidenceSynthesisCertaintyCertaintySubcomponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub rating: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
}
