// Unit tests for session construction and base-location normalization

use crate::error::session::SessionError;
use crate::session::Session;

#[test]
fn given_plain_location_when_session_created_then_api_prefix_appended() {
    let session = Session::new("token", "https://publish.example.com").unwrap();

    assert_eq!(session.base_location(), "https://publish.example.com/v0/");
}

#[test]
fn given_trailing_slashes_when_session_created_then_normalized() {
    let session = Session::new("token", "https://publish.example.com///").unwrap();

    assert_eq!(session.base_location(), "https://publish.example.com/v0/");
}

#[test]
fn given_location_with_path_when_session_created_then_prefix_appended_below_it() {
    let session = Session::new("token", "https://example.com/publishing").unwrap();

    assert_eq!(session.base_location(), "https://example.com/publishing/v0/");
}

/// **VALUE**: Construction fails fast on a structurally invalid location
/// instead of deferring the failure to the first request.
#[test]
fn given_relative_location_when_session_created_then_fails_eagerly() {
    let result = Session::new("token", "publish.example.com");

    assert!(matches!(
        result,
        Err(SessionError::InvalidBaseLocation { .. })
    ));
}

#[test]
fn given_session_when_debug_formatted_then_credential_redacted() {
    let session = Session::new("super-secret", "https://publish.example.com").unwrap();

    let debug = format!("{session:?}");

    assert!(!debug.contains("super-secret"));
}
