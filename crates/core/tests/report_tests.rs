//! Integration tests for report normalization and verdict classification.

use serde_json::{json, Value};
use sigtrust_core::{Interpretation, ReportError, ValidationReport};

fn interpret(value: Value) -> Interpretation {
    ValidationReport(value).interpret().unwrap()
}

fn verdicts(value: Value) -> Vec<sigtrust_core::Verdict> {
    match interpret(value) {
        Interpretation::Signatures(verdicts) => verdicts,
        Interpretation::NoSignatures => panic!("expected signatures"),
    }
}

#[test]
fn summary_at_root_and_nested_are_equivalent() {
    let entry = json!({
        "signedBy": "CN=Alice",
        "signingTime": "2024-03-01T10:15:00Z",
        "indication": "TOTAL_PASSED"
    });
    let at_root = json!({ "signatureOrTimestamp": [entry] });
    let nested = json!({ "simpleReport": { "signatureOrTimestamp": [entry] } });

    assert_eq!(interpret(at_root), interpret(nested));
}

#[test]
fn single_entry_and_one_element_list_are_equivalent() {
    let entry = json!({
        "signedBy": "CN=Alice",
        "signingTime": "2024-03-01T10:15:00Z",
        "indication": "TOTAL_FAILED",
        "subIndication": "FORMAT_FAILURE"
    });
    let as_object = json!({ "signatureOrTimestamp": entry });
    let as_list = json!({ "signatureOrTimestamp": [entry] });

    let single = verdicts(as_object);
    assert_eq!(single.len(), 1);
    assert_eq!(single, verdicts(as_list));
}

#[test]
fn total_passed_is_valid_even_with_a_sub_indication() {
    let report = json!({
        "signatureOrTimestamp": {
            "signedBy": "CN=Alice",
            "signingTime": "2024-03-01T10:15:00Z",
            "indication": "TOTAL_PASSED",
            "subIndication": "LEFTOVER_DETAIL"
        }
    });
    let verdict = &verdicts(report)[0];
    assert!(verdict.is_valid);
    assert_eq!(verdict.indication, "TOTAL_PASSED");
    assert!(verdict.reason.is_none());
}

#[test]
fn indication_match_is_case_sensitive() {
    let report = json!({
        "signatureOrTimestamp": { "indication": "total_passed" }
    });
    let verdict = &verdicts(report)[0];
    assert!(!verdict.is_valid);
    assert_eq!(verdict.indication, "total_passed");
}

#[test]
fn failure_without_sub_indication_has_no_reason() {
    let report = json!({
        "signatureOrTimestamp": { "indication": "INDETERMINATE" }
    });
    let verdict = &verdicts(report)[0];
    assert!(!verdict.is_valid);
    assert_eq!(verdict.indication, "INDETERMINATE");
    assert!(verdict.reason.is_none());
    assert!(verdict.signed_by.is_none());
    assert!(verdict.signing_time.is_none());
}

#[test]
fn mixed_results_keep_service_order() {
    let report = json!({
        "simpleReport": {
            "signatureOrTimestamp": [
                {
                    "signedBy": "CN=Alice",
                    "signingTime": "2024-03-01T10:15:00Z",
                    "indication": "TOTAL_PASSED"
                },
                {
                    "signedBy": "CN=Bob",
                    "signingTime": "2024-03-02T09:00:00Z",
                    "indication": "INDETERMINATE",
                    "subIndication": "REVOKED"
                }
            ]
        }
    });
    let verdicts = verdicts(report);
    assert_eq!(verdicts.len(), 2);

    assert_eq!(verdicts[0].index, 1);
    assert!(verdicts[0].is_valid);
    assert_eq!(verdicts[0].signed_by.as_deref(), Some("CN=Alice"));
    assert!(verdicts[0].reason.is_none());

    assert_eq!(verdicts[1].index, 2);
    assert!(!verdicts[1].is_valid);
    assert_eq!(verdicts[1].indication, "INDETERMINATE");
    assert_eq!(verdicts[1].reason.as_deref(), Some("REVOKED"));
}

#[test]
fn missing_empty_or_null_collection_means_no_signatures() {
    assert_eq!(interpret(json!({})), Interpretation::NoSignatures);
    assert_eq!(
        interpret(json!({ "signatureOrTimestamp": [] })),
        Interpretation::NoSignatures
    );
    assert_eq!(
        interpret(json!({ "signatureOrTimestamp": null })),
        Interpretation::NoSignatures
    );
    assert_eq!(
        interpret(json!({ "simpleReport": { "validSignaturesCount": 0 } })),
        Interpretation::NoSignatures
    );
}

#[test]
fn unknown_entry_fields_are_ignored() {
    let report = json!({
        "signatureOrTimestamp": {
            "signedBy": "CN=Alice",
            "indication": "TOTAL_PASSED",
            "signatureLevel": { "value": "PAdES-BASELINE-B" },
            "certificateChain": []
        }
    });
    assert!(verdicts(report)[0].is_valid);
}

#[test]
fn non_object_report_is_a_shape_error() {
    let err = ValidationReport(json!("oops")).interpret().unwrap_err();
    assert!(matches!(err, ReportError::NotAnObject));

    let err = ValidationReport(json!({ "simpleReport": 42 }))
        .interpret()
        .unwrap_err();
    assert!(matches!(err, ReportError::SummaryShape));
}

#[test]
fn entry_without_indication_is_a_shape_error() {
    let report = ValidationReport(json!({
        "signatureOrTimestamp": { "signedBy": "CN=Alice" }
    }));
    let err = report.interpret().unwrap_err();
    assert!(matches!(err, ReportError::SignatureShape(_)));
}
