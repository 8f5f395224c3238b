use publisher_client::{Job, Session};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CREDENTIAL: &str = "test-credential";

/// `Authorization` value the transport derives from [`TEST_CREDENTIAL`]
/// (credential as username, empty password).
pub const TEST_AUTH_HEADER: &str = "Basic dGVzdC1jcmVkZW50aWFsOg==";

/// Mock service plus a session pointed at it.
pub async fn session_against_mock() -> (MockServer, Session) {
    let server = MockServer::start().await;
    let session =
        Session::new(TEST_CREDENTIAL, &server.uri()).expect("mock URI is a valid base location");
    (server, session)
}

/// Publish a one-file batch against a mounted 201 mock and hand back the job.
///
/// Job handles are only obtainable through a successful publish, so tests
/// exercising the job endpoints go through this.
pub async fn published_job(server: &MockServer, session: &Session, id: &str) -> Job {
    Mock::given(method("POST"))
        .and(path("/v0/publish"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Id": id })))
        .mount(server)
        .await;

    let mut request = session.new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());

    session
        .publish(request)
        .await
        .expect("mocked publish should succeed")
}
