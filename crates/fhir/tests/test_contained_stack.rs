//! Resources nest through `contained`, so decoding recurses through the
//! `Resource` enum. These tests keep that recursion cheap enough for threads
//! with small stacks (2MB, the usual async runtime worker default).
use meridian_fhir::r4::*;

const OBSERVATION_WITH_CONTAINED: &str = r##"{
  "resourceType": "Observation",
  "contained": [
    {
      "resourceType": "Patient",
      "id": "db2b7000-672c-43e3-8447-e43dcc166950"
    }
  ],
  "text": {
    "status": "generated",
    "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Complete Resource Test</div>"
  },
  "status": "final",
  "code": {
    "coding": [{
      "system": "http://loinc.org",
      "code": "29463-7",
      "display": "Body Weight"
    }]
  },
  "subject": {
    "reference": "#db2b7000-672c-43e3-8447-e43dcc166950"
  },
  "valueQuantity": {
    "value": 85.5,
    "unit": "kg"
  }
}"##;

/// Every variant is boxed, so the enum is a tag plus a pointer.
#[test]
fn test_resource_enum_size_is_reasonable() {
    let size = std::mem::size_of::<Resource>();
    assert!(
        size <= 16,
        "Resource enum is {} bytes, expected a boxed variant per resource type",
        size
    );
}

#[test]
fn test_deserialize_contained_resource_small_stack() {
    let stack_size = 2 * 1024 * 1024;

    let handle = std::thread::Builder::new()
        .name("small-stack-test".into())
        .stack_size(stack_size)
        .spawn(|| {
            let resource: Resource = serde_json::from_str(OBSERVATION_WITH_CONTAINED)
                .expect("Failed to deserialize Observation with contained Patient");

            if let Resource::Observation(obs) = &resource {
                let contained = obs.contained.as_ref().unwrap();
                assert_eq!(contained.len(), 1);
                assert!(matches!(&contained[0], Resource::Patient(_)));
                assert_eq!(
                    contained[0].id(),
                    Some("db2b7000-672c-43e3-8447-e43dcc166950")
                );
                assert!(matches!(obs.value, Some(ObservationValue::Quantity(_))));
            } else {
                panic!("Expected Observation resource, got {:?}", resource);
            }
        })
        .expect("Failed to spawn thread");

    handle
        .join()
        .expect("Thread panicked, likely a stack overflow decoding contained resources");
}

#[test]
fn test_deserialize_resource_directly_small_stack() {
    let json = r#"{
      "resourceType": "Patient",
      "id": "example",
      "name": [{"family": "Smith", "given": ["John"]}]
    }"#;

    let stack_size = 2 * 1024 * 1024;

    let handle = std::thread::Builder::new()
        .name("small-stack-direct".into())
        .stack_size(stack_size)
        .spawn(move || {
            let resource: Resource =
                serde_json::from_str(json).expect("Failed to deserialize Patient resource");
            assert!(matches!(resource, Resource::Patient(_)));
            assert_eq!(resource.resource_type(), "Patient");
        })
        .expect("Failed to spawn thread");

    handle
        .join()
        .expect("Thread panicked while decoding a Patient");
}

#[test]
fn test_nested_contained_round_trip() {
    let resource: Resource = serde_json::from_str(OBSERVATION_WITH_CONTAINED).unwrap();
    let json = serde_json::to_value(&resource).unwrap();
    assert_eq!(json["contained"][0]["resourceType"], "Patient");
    let again: Resource = serde_json::from_value(json).unwrap();
    assert_eq!(resource, again);
}
