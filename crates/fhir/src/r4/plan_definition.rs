use super::*;
use meridian_fhir_macro::FhirSerde;

/// A pre-defined group of actions: an order set, clinical protocol or ECA
/// rule. Actions nest, so a definition is a tree of [`PlanDefinitionAction`].
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_serde(resource = "PlanDefinition")]
pub struct PlanDefinition {
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
    pub r#type: Option<CodeableConcept>,
    pub status: Code,
    pub experimental: Option<Boolean>,
    pub subject: Option<PlanDefinitionSubject>,
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
    pub goal: Option<Vec<PlanDefinitionGoal>>,
    pub action: Option<Vec<PlanDefinitionAction>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionSubject {
    CodeableConcept(Box<CodeableConcept>),
    Reference(Box<Reference>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionGoal {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: Option<CodeableConcept>,
    pub description: CodeableConcept,
    pub priority: Option<CodeableConcept>,
    pub start: Option<CodeableConcept>,
    pub addresses: Option<Vec<CodeableConcept>>,
    pub documentation: Option<Vec<RelatedArtifact>>,
    pub target: Option<Vec<PlanDefinitionGoalTarget>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionGoalTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub measure: Option<CodeableConcept>,
    pub detail: Option<PlanDefinitionGoalTargetDetail>,
    pub due: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionGoalTargetDetail {
    Quantity(Box<Quantity>),
    Range(Box<Range>),
    CodeableConcept(Box<CodeableConcept>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionAction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub prefix: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub text_equivalent: Option<String>,
    pub priority: Option<Code>,
    pub code: Option<Vec<CodeableConcept>>,
    pub reason: Option<Vec<CodeableConcept>>,
    pub documentation: Option<Vec<RelatedArtifact>>,
    pub goal_id: Option<Vec<Id>>,
    pub subject: Option<PlanDefinitionActionSubject>,
    pub trigger: Option<Vec<TriggerDefinition>>,
    pub condition: Option<Vec<PlanDefinitionActionCondition>>,
    pub input: Option<Vec<DataRequirement>>,
    pub output: Option<Vec<DataRequirement>>,
    pub related_action: Option<Vec<PlanDefinitionActionRelatedAction>>,
    pub timing: Option<PlanDefinitionActionTiming>,
    pub participant: Option<Vec<PlanDefinitionActionParticipant>>,
    pub r#type: Option<CodeableConcept>,
    pub grouping_behavior: Option<Code>,
    pub selection_behavior: Option<Code>,
    pub required_behavior: Option<Code>,
    pub precheck_behavior: Option<Code>,
    pub cardinality_behavior: Option<Code>,
    pub definition: Option<PlanDefinitionActionDefinition>,
    pub transform: Option<Canonical>,
    pub dynamic_value: Option<Vec<PlanDefinitionActionDynamicValue>>,
    pub action: Option<Vec<PlanDefinitionAction>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionActionSubject {
    CodeableConcept(Box<CodeableConcept>),
    Reference(Box<Reference>),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionActionTiming {
    DateTime(DateTime),
    Age(Box<Age>),
    Period(Box<Period>),
    Duration(Box<Duration>),
    Range(Box<Range>),
    Timing(Box<Timing>),
}

/// What the action performs: an ActivityDefinition or PlanDefinition
/// (`canonical`), or any other artifact (`uri`).
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionActionDefinition {
    Canonical(Canonical),
    Uri(Uri),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionActionCondition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub kind: Code,
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionActionRelatedAction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub action_id: Id,
    pub relationship: Code,
    pub offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum PlanDefinitionActionRelatedActionOffset {
    Duration(Box<Duration>),
    Range(Box<Range>),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionActionParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub role: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionActionDynamicValue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub expression: Option<Expression>,
}
