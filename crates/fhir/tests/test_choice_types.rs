use meridian_fhir::r4::*;
use meridian_fhir::{CodecError, FhirChoice, FhirCodec, PositiveIntValue, PrecisionDateTime};
use rust_decimal_macros::dec;
use serde_json::json;

fn plan_definition() -> serde_json::Value {
    json!({
        "resourceType": "PlanDefinition",
        "id": "low-suicide-risk-order-set",
        "status": "active",
        "subjectCodeableConcept": {
            "coding": [{ "system": "http://hl7.org/fhir/resource-types", "code": "Patient" }]
        },
        "goal": [{
            "description": { "text": "Reduce risk" },
            "target": [{
                "measure": { "text": "PHQ-9" },
                "detailRange": {
                    "low": { "value": 0 },
                    "high": { "value": 4 }
                }
            }]
        }],
        "action": [{
            "title": "Suicide Risk Assessment and Outpatient Management",
            "timingDuration": { "value": 10, "unit": "min" },
            "action": [{
                "id": "referral",
                "definitionCanonical": "ActivityDefinition/referralPrimaryCareMentalHealth",
                "relatedAction": [{
                    "actionId": "medication",
                    "relationship": "before-start",
                    "offsetDuration": { "value": 1, "unit": "h" }
                }]
            }, {
                "id": "medication",
                "definitionUri": "http://example.org/fhir/protocol/citalopram",
                "_definitionUri": { "id": "def-uri" }
            }]
        }]
    })
}

#[test]
fn test_plan_definition_choice_fields_decode() {
    let plan: PlanDefinition = serde_json::from_value(plan_definition()).unwrap();

    assert_eq!(plan.status.value.as_deref(), Some("active"));
    match &plan.subject {
        Some(PlanDefinitionSubject::CodeableConcept(cc)) => {
            let coding = &cc.coding.as_ref().unwrap()[0];
            assert_eq!(
                coding.code.as_ref().and_then(|c| c.value.as_deref()),
                Some("Patient")
            );
        }
        other => panic!("unexpected subject: {:?}", other),
    }

    let target = &plan.goal.as_ref().unwrap()[0].target.as_ref().unwrap()[0];
    assert!(matches!(target.detail, Some(PlanDefinitionGoalTargetDetail::Range(_))));

    let action = &plan.action.as_ref().unwrap()[0];
    match &action.timing {
        Some(PlanDefinitionActionTiming::Duration(duration)) => {
            assert_eq!(
                duration.value.as_ref().and_then(|v| v.value.as_ref()).and_then(|d| d.value()),
                Some(dec!(10))
            );
        }
        other => panic!("unexpected timing: {:?}", other),
    }

    let nested = action.action.as_ref().unwrap();
    assert_eq!(nested.len(), 2);
    assert!(matches!(
        &nested[0].definition,
        Some(PlanDefinitionActionDefinition::Canonical(c))
            if c.value.as_deref() == Some("ActivityDefinition/referralPrimaryCareMentalHealth")
    ));
    let offset = &nested[0].related_action.as_ref().unwrap()[0].offset;
    assert!(matches!(offset, Some(PlanDefinitionActionRelatedActionOffset::Duration(_))));

    match &nested[1].definition {
        Some(PlanDefinitionActionDefinition::Uri(uri)) => {
            assert_eq!(uri.id.as_deref(), Some("def-uri"));
            assert_eq!(
                uri.value.as_deref(),
                Some("http://example.org/fhir/protocol/citalopram")
            );
        }
        other => panic!("unexpected definition: {:?}", other),
    }
}

#[test]
fn test_plan_definition_round_trip_is_exact() {
    let input = plan_definition();
    let plan: PlanDefinition = serde_json::from_value(input.clone()).unwrap();
    let output = serde_json::to_value(&plan).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_choice_writes_exactly_one_suffixed_key() {
    let action = PlanDefinitionAction {
        timing: Some(PlanDefinitionActionTiming::DateTime(
            PrecisionDateTime::parse("2021-01-01").unwrap().into(),
        )),
        ..Default::default()
    };
    let json = serde_json::to_value(&action).unwrap();
    let object = json.as_object().unwrap();
    let timing_keys: Vec<&str> = object
        .keys()
        .map(|k| k.as_str())
        .filter(|k| k.starts_with("timing"))
        .collect();
    assert_eq!(timing_keys, vec!["timingDateTime"]);
    assert_eq!(json["timingDateTime"], "2021-01-01");
}

#[test]
fn test_multiple_choice_values_rejected() {
    let input = json!({
        "resourceType": "PlanDefinition",
        "status": "draft",
        "subjectCodeableConcept": { "text": "Patient" },
        "subjectReference": { "reference": "Group/1" }
    });
    let err = serde_json::from_value::<PlanDefinition>(input).unwrap_err();
    assert!(
        err.to_string().contains("multiple values for polymorphic field"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_multiple_choice_values_reports_nested_path() {
    let input = json!({
        "status": "draft",
        "action": [{
            "title": "first"
        }, {
            "timingDateTime": "2020-01-01",
            "timingPeriod": { "start": "2020-01-01" }
        }]
    });
    let err = <PlanDefinition as FhirCodec>::decode_parts(Some(input), None).unwrap_err();
    assert_eq!(err.path(), Some("action[1]"));
    match err.root_cause() {
        CodecError::MultipleChoiceValues { field, keys } => {
            assert_eq!(field, "timing");
            assert_eq!(keys, &vec!["timingDateTime".to_string(), "timingPeriod".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_primitive_choice_carries_sibling_metadata() {
    let input = json!({
        "resourceType": "Patient",
        "deceasedBoolean": false,
        "_deceasedBoolean": {
            "extension": [{
                "url": "http://example.org/fhir/StructureDefinition/verified",
                "valueBoolean": true
            }]
        }
    });
    let patient: Patient = serde_json::from_value(input.clone()).unwrap();
    match &patient.deceased {
        Some(PatientDeceased::Boolean(flag)) => {
            assert_eq!(flag.value, Some(false));
            let extension = &flag.extension.as_ref().unwrap()[0];
            assert!(matches!(
                &extension.value,
                Some(ExtensionValue::Boolean(b)) if b.value == Some(true)
            ));
        }
        other => panic!("unexpected deceased: {:?}", other),
    }
    assert_eq!(serde_json::to_value(&patient).unwrap(), input);
}

#[test]
fn test_metadata_only_choice_is_selected() {
    let input = json!({
        "resourceType": "Patient",
        "_multipleBirthInteger": { "id": "mb" }
    });
    let patient: Patient = serde_json::from_value(input.clone()).unwrap();
    match &patient.multiple_birth {
        Some(PatientMultipleBirth::Integer(i)) => {
            assert_eq!(i.id.as_deref(), Some("mb"));
            assert_eq!(i.value, None);
        }
        other => panic!("unexpected multipleBirth: {:?}", other),
    }
    assert_eq!(serde_json::to_value(&patient).unwrap(), input);
}

#[test]
fn test_required_choice_must_be_present() {
    let err = serde_json::from_value::<UsageContext>(json!({
        "code": { "system": "http://terminology.hl7.org/CodeSystem/usage-context-type", "code": "focus" }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("missing required field `value`"), "{}", err);

    let context: UsageContext = serde_json::from_value(json!({
        "code": { "code": "age" },
        "valueRange": { "low": { "value": 18 }, "high": { "value": 65 } }
    }))
    .unwrap();
    assert_eq!(context.value.type_suffix(), "Range");
}

#[test]
fn test_choice_type_list() {
    assert_eq!(
        PlanDefinitionActionTiming::TYPES,
        &["DateTime", "Age", "Period", "Duration", "Range", "Timing"]
    );
    assert_eq!(PlanDefinitionActionDefinition::TYPES, &["Canonical", "Uri"]);
    assert_eq!(ExtensionValue::TYPES.len(), 50);
}

#[test]
fn test_activity_definition_choices() {
    let input = json!({
        "resourceType": "ActivityDefinition",
        "id": "citalopramPrescription",
        "status": "draft",
        "kind": "MedicationRequest",
        "subjectReference": { "reference": "Group/adults" },
        "timingTiming": {
            "repeat": {
                "boundsDuration": { "value": 30, "unit": "days" },
                "frequency": 1,
                "period": 1,
                "periodUnit": "d"
            }
        },
        "productReference": { "reference": "#citalopramMedication" },
        "dosage": [{
            "text": "1 tablet oral 1 time daily",
            "asNeededBoolean": false,
            "doseAndRate": [{
                "doseQuantity": { "value": 1, "unit": "{tbl}" }
            }]
        }],
        "dynamicValue": [{
            "path": "dosageInstruction.timing",
            "expression": { "language": "text/cql", "expression": "Timing" }
        }]
    });
    let activity: ActivityDefinition = serde_json::from_value(input.clone()).unwrap();
    assert!(matches!(activity.subject, Some(ActivityDefinitionSubject::Reference(_))));
    assert!(matches!(activity.product, Some(ActivityDefinitionProduct::Reference(_))));
    match &activity.timing {
        Some(ActivityDefinitionTiming::Timing(timing)) => {
            let repeat = timing.repeat.as_ref().unwrap();
            assert!(matches!(repeat.bounds, Some(TimingRepeatBounds::Duration(_))));
            assert_eq!(repeat.frequency.as_ref().unwrap().value, PositiveIntValue::new(1));
        }
        other => panic!("unexpected timing: {:?}", other),
    }
    let dosage = &activity.dosage.as_ref().unwrap()[0];
    assert!(matches!(dosage.as_needed, Some(DosageAsNeeded::Boolean(_))));
    assert!(matches!(
        dosage.dose_and_rate.as_ref().unwrap()[0].dose,
        Some(DosageDoseAndRateDose::Quantity(_))
    ));
    assert_eq!(serde_json::to_value(&activity).unwrap(), input);
}

#[test]
fn test_extension_value_choice() {
    let extension: Extension = serde_json::from_value(json!({
        "url": "http://example.org/fhir/StructureDefinition/note",
        "valueAnnotation": {
            "authorString": "Dr. Adams",
            "text": "checked"
        }
    }))
    .unwrap();
    match &extension.value {
        Some(ExtensionValue::Annotation(annotation)) => {
            assert!(matches!(annotation.author, Some(AnnotationAuthor::String(_))));
        }
        other => panic!("unexpected value: {:?}", other),
    }
}

#[test]
fn test_trigger_and_data_requirement_choices() {
    let input = json!({
        "type": "named-event",
        "name": "patient-view",
        "timingDate": "2021-03-01",
        "data": [{
            "type": "Observation",
            "subjectCodeableConcept": { "text": "Patient" },
            "dateFilter": [{
                "path": "effective",
                "valueDuration": { "value": 30, "unit": "d" }
            }],
            "sort": [{ "path": "effective", "direction": "descending" }]
        }]
    });
    let trigger: TriggerDefinition = serde_json::from_value(input.clone()).unwrap();
    assert!(matches!(trigger.timing, Some(TriggerDefinitionTiming::Date(_))));
    let data = &trigger.data.as_ref().unwrap()[0];
    assert!(matches!(data.subject, Some(DataRequirementSubject::CodeableConcept(_))));
    assert!(matches!(
        data.date_filter.as_ref().unwrap()[0].value,
        Some(DataRequirementDateFilterValue::Duration(_))
    ));
    assert_eq!(serde_json::to_value(&trigger).unwrap(), input);
}
