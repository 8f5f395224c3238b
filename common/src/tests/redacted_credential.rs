// Unit tests for RedactedCredential

use crate::RedactedCredential;

const SECRET: &str = "super-secret-credential";

/// **VALUE**: Proves the credential cannot leak through Debug or Display.
///
/// **WHY THIS MATTERS**: Error messages and log lines routinely format whole
/// structs with `{:?}`. If the wrapper ever echoed its value, the credential
/// would end up in logs the moment anything around it fails.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug impl replacing the
/// hand-written redacting one.
#[test]
fn given_credential_when_formatted_then_value_never_appears() {
    let credential = RedactedCredential::new(SECRET);

    let debug = format!("{credential:?}");
    let display = format!("{credential}");

    assert!(!debug.contains(SECRET), "Debug leaked the credential");
    assert!(!display.contains(SECRET), "Display leaked the credential");
    assert!(debug.contains("REDACTED"));
    assert!(display.contains("REDACTED"));
}

#[test]
fn given_credential_when_exposed_then_returns_exact_value() {
    let credential = RedactedCredential::new(SECRET);

    assert_eq!(credential.expose(), SECRET);
    assert_eq!(credential.len(), SECRET.len());
    assert!(!credential.is_empty());
}

#[test]
fn given_empty_credential_when_checked_then_is_empty() {
    let credential = RedactedCredential::new("");

    assert!(credential.is_empty());
    assert_eq!(credential.len(), 0);
}

/// **VALUE**: Serialization is refused instead of silently writing the value.
#[test]
fn given_credential_when_serialized_then_fails_with_redact_error() {
    let credential = RedactedCredential::new(SECRET);

    let result = serde_json::to_string(&credential);

    let error = result.expect_err("serialization must be refused");
    assert!(error.to_string().contains("cannot be serialized"));
    assert!(!error.to_string().contains(SECRET));
}
