use crate::helpers::{TEST_AUTH_HEADER, session_against_mock};

use publisher_client::ApiError;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_version_listing_when_fetched_then_preserves_server_order() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("GET"))
        .and(path("/v0/versions"))
        .and(header("Authorization", TEST_AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["2023-01", "2023-06"])))
        .mount(&server)
        .await;

    let versions = session.available_versions().await.expect("listing succeeds");

    assert_eq!(versions, vec!["2023-01".to_string(), "2023-06".to_string()]);
}

/// **VALUE**: The "most recent" sentinel never leaks into the listing, even
/// from a server that reports it.
#[tokio::test]
async fn given_listing_with_sentinel_when_fetched_then_sentinel_filtered() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("GET"))
        .and(path("/v0/versions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["2023-01", "latest", "2023-06"])),
        )
        .mount(&server)
        .await;

    let versions = session.available_versions().await.expect("listing succeeds");

    assert_eq!(versions, vec!["2023-01".to_string(), "2023-06".to_string()]);
}

#[tokio::test]
async fn given_unauthorized_session_when_versions_fetched_then_server_error_with_fault() {
    let (server, session) = session_against_mock().await;

    Mock::given(method("GET"))
        .and(path("/v0/versions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "auth",
            "Title": "bad credentials",
            "Detail": "credential not recognized",
            "Instance": "/versions"
        })))
        .mount(&server)
        .await;

    match session.available_versions().await {
        Err(ApiError::Server { status, fault, message, .. }) => {
            assert_eq!(status.0, 401);
            assert_eq!(fault.expect("fault decodes").title, "bad credentials");
            assert_eq!(message, "bad credentials");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}
