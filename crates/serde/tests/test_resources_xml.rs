//! JSON and XML round trips for whole R4 resources.
#![cfg(all(feature = "xml", feature = "R4"))]

use meridian_fhir::r4::*;
use meridian_serde::{
    Format, SerdeError, convert, from_json_str, from_xml_str, to_json_value, to_xml_string,
    to_xml_string_pretty,
};
use serde_json::Value;

/// Reads `json`, writes it as XML, reads that back and checks both the model
/// and its JSON are unchanged. Returns the XML for further checks.
fn assert_round_trip(json: &str) -> std::string::String {
    let original: Value = serde_json::from_str(json).unwrap();
    let resource: Resource = from_json_str(json).unwrap();

    let xml = to_xml_string(&resource).unwrap();
    let from_xml: Resource = from_xml_str(&xml).unwrap();
    assert_eq!(from_xml, resource, "XML: {}", xml);
    assert_eq!(to_json_value(&from_xml).unwrap(), original);

    let pretty = to_xml_string_pretty(&resource).unwrap();
    assert_eq!(from_xml_str::<Resource>(&pretty).unwrap(), resource);
    xml
}

#[test]
fn test_patient_with_narrative_and_contained() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "Patient",
            "id": "example",
            "text": {
                "status": "generated",
                "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\"><p>Peter <b>Chalmers</b> &amp; family</p></div>"
            },
            "contained": [{
                "resourceType": "Observation",
                "id": "obs1",
                "status": "final",
                "code": { "text": "eye colour" },
                "valueString": "blue"
            }],
            "identifier": [{
                "use": "usual",
                "system": "urn:oid:1.2.36.146.595.217.0.1",
                "value": "12345"
            }],
            "active": true,
            "name": [{
                "id": "n1",
                "use": "official",
                "family": "Chalmers",
                "given": ["Peter", null, "James"],
                "_given": [null, { "id": "middle" }, null]
            }],
            "gender": "male",
            "birthDate": "1974-12-25",
            "_birthDate": {
                "extension": [{
                    "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
                    "valueDateTime": "1974-12-25T14:35:45-05:00"
                }]
            },
            "deceasedBoolean": false,
            "multipleBirthInteger": 2
        }"#,
    );
    assert!(xml.contains(r#"<Patient xmlns="http://hl7.org/fhir"><id value="example"/>"#));
    assert!(xml.contains(
        r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>Peter <b>Chalmers</b> &amp; family</p></div>"#
    ));
    assert!(xml.contains(r#"<contained><Observation><id value="obs1"/>"#), "{}", xml);
    assert!(xml.contains(r#"<name id="n1">"#), "{}", xml);
    assert!(xml.contains(r#"<given id="middle"/>"#), "{}", xml);
    assert!(xml.contains(r#"<deceasedBoolean value="false"/>"#), "{}", xml);
    assert!(xml.contains(r#"<multipleBirthInteger value="2"/>"#), "{}", xml);
}

#[test]
fn test_plan_definition() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "PlanDefinition",
            "id": "zika-virus-intervention",
            "url": "http://example.org/PlanDefinition/zika-virus-intervention",
            "status": "active",
            "useContext": [{
                "code": { "system": "http://terminology.hl7.org/CodeSystem/usage-context-type", "code": "age" },
                "valueRange": { "low": { "value": 12, "unit": "a" } }
            }],
            "action": [{
                "title": "Zika Virus Assessment",
                "trigger": [{ "type": "named-event", "name": "patient-view" }],
                "condition": [{
                    "kind": "applicability",
                    "expression": { "language": "text/cql", "expression": "Is Patient Pregnant" }
                }],
                "timingPeriod": { "start": "2016-01-01" },
                "action": [{
                    "definitionCanonical": "ActivityDefinition/administer-zika-virus-exposure-assessment"
                }, {
                    "definitionUri": "http://example.org/protocol/zika",
                    "_definitionUri": {
                        "extension": [{ "url": "http://example.org/reviewed", "valueBoolean": true }]
                    }
                }]
            }]
        }"#,
    );
    assert!(xml.contains(r#"<valueRange><low><value value="12"/>"#), "{}", xml);
    assert!(xml.contains("<timingPeriod><start value=\"2016-01-01\"/></timingPeriod>"));
    assert!(xml.contains(
        r#"<definitionUri value="http://example.org/protocol/zika"><extension url="http://example.org/reviewed"><valueBoolean value="true"/></extension></definitionUri>"#
    ));
}

#[test]
fn test_activity_definition() {
    assert_round_trip(
        r##"{
            "resourceType": "ActivityDefinition",
            "id": "citalopramPrescription",
            "status": "active",
            "kind": "MedicationRequest",
            "timingTiming": {
                "repeat": { "frequency": 1, "period": 1, "periodUnit": "d" }
            },
            "productReference": { "reference": "#citalopramMedication" },
            "dosage": [{
                "text": "1 tablet oral 1 time daily",
                "timing": { "repeat": { "frequency": 1, "period": 1, "periodUnit": "d" } },
                "doseAndRate": [{ "doseQuantity": { "value": 1, "unit": "{tbl}" } }]
            }],
            "dynamicValue": [{
                "path": "dispenseRequest.numberOfRepeatsAllowed",
                "expression": { "language": "text/cql", "expression": "3" }
            }]
        }"##,
    );
}

#[test]
fn test_graph_definition() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "GraphDefinition",
            "id": "example",
            "name": "Document Generation Template",
            "status": "draft",
            "start": "Composition",
            "link": [{
                "path": "Composition.subject",
                "target": [{
                    "type": "Patient",
                    "link": [{
                        "path": "Patient.link.other",
                        "min": 0,
                        "max": "*",
                        "target": [{ "type": "RelatedPerson" }]
                    }]
                }]
            }]
        }"#,
    );
    assert!(xml.contains(r#"<min value="0"/><max value="*"/>"#), "{}", xml);
}

#[test]
fn test_evidence_synthesis_decimals_keep_their_digits() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "EffectEvidenceSynthesis",
            "id": "example",
            "status": "draft",
            "population": { "reference": "EvidenceVariable/example-population" },
            "exposure": { "reference": "EvidenceVariable/example-exposure" },
            "exposureAlternative": { "reference": "EvidenceVariable/example-exposure-alternative" },
            "outcome": { "reference": "EvidenceVariable/example-outcome" },
            "effectEstimate": [{
                "value": -0.0250,
                "precisionEstimate": [{ "level": 0.950, "from": -0.0657, "to": 0.0157 }]
            }]
        }"#,
    );
    assert!(xml.contains(r#"<value value="-0.0250"/>"#), "{}", xml);
    assert!(xml.contains(r#"<level value="0.950"/>"#), "{}", xml);

    assert_round_trip(
        r#"{
            "resourceType": "RiskEvidenceSynthesis",
            "status": "draft",
            "population": { "reference": "EvidenceVariable/example-population" },
            "outcome": { "reference": "EvidenceVariable/example-outcome" },
            "riskEstimate": { "value": 0.0266, "denominatorCount": 3009, "numeratorCount": 80 }
        }"#,
    );
}

#[test]
fn test_bundle_entries() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "Bundle",
            "id": "bundle-example",
            "type": "searchset",
            "total": 1,
            "link": [{ "relation": "self", "url": "http://example.org/Patient?name=peter" }],
            "entry": [{
                "fullUrl": "http://example.org/Patient/1",
                "resource": { "resourceType": "Patient", "id": "1", "active": true },
                "search": { "mode": "match", "score": 1.0 }
            }]
        }"#,
    );
    assert!(
        xml.contains(r#"<resource><Patient><id value="1"/><active value="true"/></Patient></resource>"#),
        "{}",
        xml
    );
}

#[test]
fn test_multiple_choice_values_in_xml() {
    let xml = r#"<Patient xmlns="http://hl7.org/fhir">
        <deceasedBoolean value="true"/>
        <deceasedDateTime value="2015-02-14"/>
    </Patient>"#;
    let err = from_xml_str::<Patient>(xml).unwrap_err();
    assert!(matches!(err, SerdeError::Codec(_)));
    assert!(
        err.to_string().contains("multiple values for polymorphic field"),
        "{}",
        err
    );
}

#[test]
fn test_unknown_root_resource() {
    let err = from_xml_str::<Resource>(r#"<Medication xmlns="http://hl7.org/fhir"/>"#).unwrap_err();
    assert!(err.to_string().contains("unknown resourceType `Medication`"), "{}", err);
}

#[test]
fn test_convert_between_formats() {
    let json = r#"{"resourceType":"Observation","status":"final","code":{"text":"weight"},"valueQuantity":{"value":72.50,"unit":"kg"}}"#;
    let xml = convert(json, Format::Json, Format::Xml, true).unwrap();
    assert!(xml.contains("<valueQuantity>"), "{}", xml);
    assert!(xml.contains(r#"<value value="72.50"/>"#), "{}", xml);
    assert_eq!(convert(&xml, Format::Xml, Format::Json, false).unwrap(), json);
}

#[test]
fn test_line_breaks_survive_xml() {
    let xml = assert_round_trip(
        r#"{
            "resourceType": "PlanDefinition",
            "status": "draft",
            "description": "line1\nline2\r\n\tindented"
        }"#,
    );
    assert!(
        xml.contains(r#"<description value="line1&#xA;line2&#xD;&#xA;&#x9;indented"/>"#),
        "{}",
        xml
    );
}

#[test]
fn test_div_cannot_carry_sibling_elements() {
    let json = r#"{
        "resourceType": "Patient",
        "text": {
            "status": "generated",
            "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">x</div><extension url=\"http://example.org\"><valueString value=\"extra\"/></extension>"
        }
    }"#;
    let patient: Patient = from_json_str(json).unwrap();
    let err = to_xml_string(&patient).unwrap_err();
    assert!(err.to_string().contains("Failed to parse XHTML div content"), "{}", err);
}

#[test]
fn test_deeply_nested_xml_is_rejected() {
    let levels = 50_000;
    let xml = format!(
        r#"<Patient xmlns="http://hl7.org/fhir">{}{}</Patient>"#,
        r#"<extension url="a">"#.repeat(levels),
        "</extension>".repeat(levels)
    );
    let err = from_xml_str::<Patient>(&xml).unwrap_err();
    assert!(err.to_string().contains("XML nesting exceeds"), "{}", err);
}
