use crate::helpers::{TEST_AUTH_HEADER, session_against_mock};

use publisher_client::ApiError;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Public API tests for the publish operation
// These test the PUBLIC interface from an external consumer's perspective
// ============================================================================

/// **VALUE**: Verifies the complete happy path in one exchange: Basic auth
/// header, version query parameter, exact JSON body with base64 contents,
/// and the returned job bound to the originating session.
///
/// **WHY THIS MATTERS**: This is the contract the server actually sees. Any
/// drift in encoding, ordering, or authentication shows up here before it
/// shows up against a real deployment.
#[tokio::test]
async fn given_accepted_batch_when_published_then_returns_bound_job() {
    // GIVEN: a server accepting exactly our serialized batch
    let (server, session) = session_against_mock().await;

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .and(query_param("version", "latest"))
        .and(header("Authorization", TEST_AUTH_HEADER))
        .and(body_json(json!({
            "files": [
                { "filename": "layout.xml", "contents": "PGxheW91dC8+" },
                { "filename": "data.xml", "contents": "PGRhdGEvPg==" }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "job-17" })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: attaching two files in order and publishing
    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());
    request.attach_bytes("data.xml", b"<data/>".to_vec());

    let job = session.publish(request).await.expect("publish succeeds");

    // THEN: the job carries the server id and the originating session
    assert_eq!(job.id(), "job-17");
    assert_eq!(job.session().base_location(), session.base_location());
}

#[tokio::test]
async fn given_files_on_disk_when_attached_and_published_then_body_matches_disk_bytes() {
    let (server, session) = session_against_mock().await;

    let dir = tempfile::tempdir().unwrap();
    let layout = dir.path().join("layout.xml");
    let data = dir.path().join("nested").join("rows.csv");
    tokio::fs::write(&layout, b"<report compact=\"yes\"/>")
        .await
        .unwrap();
    tokio::fs::create_dir_all(data.parent().unwrap()).await.unwrap();
    tokio::fs::write(&data, b"1,2,3\n4,5,6\n").await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .and(body_json(json!({
            "files": [
                { "filename": "layout.xml", "contents": "PHJlcG9ydCBjb21wYWN0PSJ5ZXMiLz4=" },
                { "filename": "rows.csv", "contents": "MSwyLDMKNCw1LDYK" }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "job-disk" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_file(&layout).await.unwrap();
    request.attach_file(&data).await.unwrap();

    let job = session.publish(request).await.expect("publish succeeds");
    assert_eq!(job.id(), "job-disk");
}

#[tokio::test]
async fn given_selected_version_when_submitted_then_version_travels_as_query_param() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .and(query_param("version", "2026-01"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": "job-v" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());
    request.set_version("2026-01");

    // submit() goes through the request's session back-reference
    let job = request.submit().await.expect("publish succeeds");
    assert_eq!(job.id(), "job-v");
}

#[tokio::test]
async fn given_rejected_batch_when_published_then_yields_validation_error() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "type": "schema",
            "Title": "bad layout",
            "Detail": "element unknown",
            "Instance": "/publish"
        })))
        .mount(&server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<oops>".to_vec());

    match session.publish(request).await {
        Err(ApiError::Validation { fault, .. }) => {
            assert_eq!(fault.title, "bad layout");
            assert_eq!(fault.detail, "element unknown");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn given_server_failure_when_published_then_yields_server_error() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());

    match session.publish(request).await {
        Err(ApiError::Server { status, message, .. }) => {
            assert_eq!(status.0, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

/// **VALUE**: Only 201 creates a job; a well-meaning 200 is still a protocol
/// violation and classified as an error rather than half-decoded.
#[tokio::test]
async fn given_non_created_success_when_published_then_classified_as_error() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Id": "job-1" })))
        .mount(&server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());

    match session.publish(request).await {
        Err(ApiError::Server { status, .. }) => assert_eq!(status.0, 200),
        other => panic!("expected Server, got {other:?}"),
    }
}
