//! Secure credential handling with redacted Debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// An access credential that never exposes its value in logs or debug output.
///
/// The wrapped value is zeroized on drop.
#[derive(Clone)]
pub struct RedactedCredential {
    inner: String,
}

impl RedactedCredential {
    /// Create a new redacted credential.
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            inner: credential.into(),
        }
    }

    /// Get the actual credential value for transmission.
    ///
    /// # Security Note
    /// Only call this at the point the transport applies authentication.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Get the credential length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the credential is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedCredential([REDACTED])")
    }
}

impl fmt::Display for RedactedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED CREDENTIAL]")
    }
}

impl Drop for RedactedCredential {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedCredential {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from(
                "RedactedCredential cannot be serialized - use expose() explicitly",
            ),
            location: ErrorLocation::capture(),
        }))
    }
}
