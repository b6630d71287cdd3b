use super::*;
use meridian_fhir_macro::FhirSerde;

/// How a medication is or should be taken.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Dosage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: Option<Integer>,
    pub text: Option<String>,
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    pub patient_instruction: Option<String>,
    pub timing: Option<Timing>,
    pub as_needed: Option<DosageAsNeeded>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose_and_rate: Option<Vec<DosageDoseAndRate>>,
    pub max_dose_per_period: Option<Ratio>,
    pub max_dose_per_administration: Option<SimpleQuantity>,
    pub max_dose_per_lifetime: Option<SimpleQuantity>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageAsNeeded {
    Boolean(Boolean),
    CodeableConcept(Box<CodeableConcept>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DosageDoseAndRate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub dose: Option<DosageDoseAndRateDose>,
    pub rate: Option<DosageDoseAndRateRate>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageDoseAndRateDose {
    Range(Box<Range>),
    Quantity(Box<SimpleQuantity>),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageDoseAndRateRate {
    Ratio(Box<Ratio>),
    Range(Box<Range>),
    Quantity(Box<SimpleQuantity>),
}
