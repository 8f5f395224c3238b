// Unit tests for the publish request builder and its wire encoding

use crate::error::request::RequestError;
use crate::publish::PublishFile;
use crate::session::Session;
use crate::DEFAULT_VERSION;

fn test_session() -> Session {
    Session::new("secret", "https://publish.example.com").expect("valid base location")
}

/// **VALUE**: The serialized batch preserves both attachment order and the
/// exact content bytes through the base64 encoding.
///
/// **WHY THIS MATTERS**: The server applies files in sequence (layout first
/// by convention), and the payloads are binary. Reordering or lossy encoding
/// would corrupt publishing runs in ways only visible in rendered output.
#[test]
fn given_attached_bytes_when_serialized_then_preserves_order_and_content() {
    let mut request = test_session().new_publish_request();
    request.attach_bytes("layout.xml", b"<layout/>".to_vec());
    request.attach_bytes("data.bin", vec![0x00, 0x01, 0x02, 0xff]);

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["files"][0]["filename"], "layout.xml");
    assert_eq!(body["files"][0]["contents"], "PGxheW91dC8+");
    assert_eq!(body["files"][1]["filename"], "data.bin");

    // round trip: the encoded contents decode back to the exact bytes
    let files: Vec<PublishFile> = serde_json::from_value(body["files"].clone()).unwrap();
    assert_eq!(files[0].contents, b"<layout/>".to_vec());
    assert_eq!(files[1].contents, vec![0x00, 0x01, 0x02, 0xff]);
}

#[tokio::test]
async fn given_missing_path_when_attach_file_called_then_fails_without_mutation() {
    let mut request = test_session().new_publish_request();

    let result = request.attach_file("/definitely/not/here.xml").await;

    assert!(matches!(result, Err(RequestError::FileRead { .. })));
    assert!(request.files().is_empty());
}

#[tokio::test]
async fn given_nested_path_when_attach_file_called_then_keeps_only_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("sources").join("chapter");
    tokio::fs::create_dir_all(&nested).await.unwrap();
    let path = nested.join("report.xml");
    tokio::fs::write(&path, b"abc").await.unwrap();

    let mut request = test_session().new_publish_request();
    request.attach_file(&path).await.unwrap();

    assert_eq!(request.files().len(), 1);
    assert_eq!(request.files()[0].filename, "report.xml");
    assert_eq!(request.files()[0].contents, b"abc".to_vec());
}

#[tokio::test]
async fn given_path_without_file_name_when_attached_then_rejected() {
    let mut request = test_session().new_publish_request();

    let result = request.attach_file("..").await;

    assert!(matches!(result, Err(RequestError::NoFileName { .. })));
    assert!(request.files().is_empty());
}

#[test]
fn given_new_request_when_inspected_then_defaults_to_latest_version() {
    let request = test_session().new_publish_request();

    assert_eq!(request.version(), DEFAULT_VERSION);
    assert!(request.files().is_empty());
}

#[test]
fn given_set_version_when_called_then_overrides_sentinel() {
    let mut request = test_session().new_publish_request();

    request.set_version("2026-01");

    assert_eq!(request.version(), "2026-01");
}
