use super::*;
use meridian_fhir_macro::FhirSerde;

/// Additional content defined by implementations.
///
/// `url` identifies the extension; the payload is either `value[x]` or nested
/// `extension` entries, never both.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Extension {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub url: Uri,
    pub value: Option<ExtensionValue>,
}

/// `Extension.value[x]`: any R4 data type.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExtensionValue {
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Canonical(Canonical),
    Code(Code),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Id(Id),
    Instant(Instant),
    Integer(Integer),
    Markdown(Markdown),
    Oid(Oid),
    PositiveInt(PositiveInt),
    String(String),
    Time(Time),
    UnsignedInt(UnsignedInt),
    Uri(Uri),
    Url(Url),
    Uuid(Uuid),
    Address(Box<Address>),
    Age(Box<Age>),
    Annotation(Box<Annotation>),
    Attachment(Box<Attachment>),
    CodeableConcept(Box<CodeableConcept>),
    Coding(Box<Coding>),
    ContactPoint(Box<ContactPoint>),
    Count(Box<Count>),
    Distance(Box<Distance>),
    Duration(Box<Duration>),
    HumanName(Box<HumanName>),
    Identifier(Box<Identifier>),
    Money(Box<Money>),
    Period(Box<Period>),
    Quantity(Box<Quantity>),
    Range(Box<Range>),
    Ratio(Box<Ratio>),
    Reference(Box<Reference>),
    SampledData(Box<SampledData>),
    Signature(Box<Signature>),
    Timing(Box<Timing>),
    ContactDetail(Box<ContactDetail>),
    Contributor(Box<Contributor>),
    DataRequirement(Box<DataRequirement>),
    Expression(Box<Expression>),
    ParameterDefinition(Box<ParameterDefinition>),
    RelatedArtifact(Box<RelatedArtifact>),
    TriggerDefinition(Box<TriggerDefinition>),
    UsageContext(Box<UsageContext>),
    Dosage(Box<Dosage>),
    Meta(Box<Meta>),
}

impl Extension {
    pub fn new(url: impl Into<std::string::String>, value: ExtensionValue) -> Self {
        let url: std::string::String = url.into();
        Self {
            id: None,
            extension: None,
            url: url.into(),
            value: Some(value),
        }
    }
}
