// Unit tests for ProcessStatus decoding and interpretation

use crate::job::ProcessStatus;

/// **VALUE**: A running job reports "not finished" and nothing else.
///
/// **WHY THIS MATTERS**: While `Finished` is null, the error fields are
/// unset on the server side; a caller reading them as meaningful would
/// treat a healthy running job as a clean success.
#[test]
fn given_running_job_body_when_decoded_then_reports_not_finished() {
    let body = r#"{"Finished":null,"Errors":0,"Errormessages":[]}"#;

    let status: ProcessStatus = serde_json::from_str(body).unwrap();

    assert!(!status.is_finished());
    assert!(!status.succeeded());
}

#[test]
fn given_finished_body_with_errors_when_decoded_then_exposes_messages_in_order() {
    let body = r#"{
        "Finished": "2026-03-01T10:30:00Z",
        "Errors": 2,
        "Errormessages": [
            {"code": 4, "error": "missing image"},
            {"code": 9, "error": "overfull page"}
        ]
    }"#;

    let status: ProcessStatus = serde_json::from_str(body).unwrap();

    assert!(status.is_finished());
    assert!(!status.succeeded());
    assert_eq!(status.errors, 2);
    assert_eq!(status.error_messages.len(), 2);
    assert_eq!(status.error_messages[0].code, 4);
    assert_eq!(status.error_messages[0].message, "missing image");
    assert_eq!(status.error_messages[1].message, "overfull page");
}

#[test]
fn given_clean_finished_body_when_decoded_then_succeeded() {
    let body = r#"{"Finished":"2026-03-01T10:30:00Z","Errors":0,"Errormessages":[]}"#;

    let status: ProcessStatus = serde_json::from_str(body).unwrap();

    assert!(status.is_finished());
    assert!(status.succeeded());
}

#[test]
fn given_body_without_error_fields_when_decoded_then_fields_default() {
    let status: ProcessStatus = serde_json::from_str(r#"{"Finished":null}"#).unwrap();

    assert!(!status.is_finished());
    assert_eq!(status.errors, 0);
    assert!(status.error_messages.is_empty());
}
