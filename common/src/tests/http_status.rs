// Unit tests for HttpStatusCode categorization

use crate::HttpStatusCode;

#[test]
fn given_success_codes_when_categorized_then_only_success_matches() {
    for code in [200u16, 201, 204] {
        let status = HttpStatusCode(code);
        assert!(status.is_success(), "{code} should be success");
        assert!(!status.is_client_error());
        assert!(!status.is_server_error());
    }
}

#[test]
fn given_client_error_codes_when_categorized_then_client_error_matches() {
    for code in [400u16, 404, 422] {
        let status = HttpStatusCode(code);
        assert!(status.is_client_error(), "{code} should be a client error");
        assert!(!status.is_success());
        assert!(!status.is_server_error());
    }
}

#[test]
fn given_server_error_codes_when_categorized_then_server_error_matches() {
    for code in [500u16, 502, 503] {
        let status = HttpStatusCode(code);
        assert!(status.is_server_error(), "{code} should be a server error");
        assert!(!status.is_success());
        assert!(!status.is_client_error());
    }
}

#[test]
fn given_u16_when_converted_then_display_shows_bare_number() {
    let status = HttpStatusCode::from(422u16);
    assert_eq!(status.to_string(), "422");
    assert_eq!(status, HttpStatusCode(422));
}
