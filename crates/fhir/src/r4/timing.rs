use super::*;
use meridian_fhir_macro::FhirSerde;

/// An event that may occur multiple times, described by explicit `event`
/// times and/or a `repeat` rule.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Timing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TimingRepeat {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub bounds: Option<TimingRepeatBounds>,
    pub count: Option<PositiveInt>,
    pub count_max: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub duration_max: Option<Decimal>,
    pub duration_unit: Option<Code>,
    pub frequency: Option<PositiveInt>,
    pub frequency_max: Option<PositiveInt>,
    pub period: Option<Decimal>,
    pub period_max: Option<Decimal>,
    pub period_unit: Option<Code>,
    pub day_of_week: Option<Vec<Code>>,
    pub time_of_day: Option<Vec<Time>>,
    pub when: Option<Vec<Code>>,
    pub offset: Option<UnsignedInt>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum TimingRepeatBounds {
    Duration(Box<Duration>),
    Range(Box<Range>),
    Period(Box<Period>),
}
