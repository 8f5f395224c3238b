use crate::classify::ServerFault;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

/// Failures of the wire exchanges with the publishing service.
///
/// Callers branch on the variant, not on message text: `NotFound` and
/// `Validation` are first-class outcomes of the protocol, the remaining
/// variants report broken communication.
#[derive(Debug, ThisError)]
pub enum ApiError {
    /// The HTTP exchange itself failed (connect, DNS, deadline, TLS).
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// A success response carried a body that did not decode.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// An endpoint URL could not be formed from the base location.
    #[error("Url Error: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    /// The server knows nothing under the requested id (HTTP 404).
    #[error("Not Found {location}")]
    NotFound { location: ErrorLocation },

    /// The server rejected the request as invalid (HTTP 422).
    #[error("Validation Error: {fault} {location}")]
    Validation {
        fault: ServerFault,
        location: ErrorLocation,
    },

    /// Any other non-success answer.
    #[error("Server Error: HTTP {status}: {message} {location}")]
    Server {
        status: HttpStatusCode,
        /// Structured body, when the server supplied one that decoded.
        fault: Option<ServerFault>,
        message: String,
        location: ErrorLocation,
    },

    /// The artifact sink refused the downloaded bytes.
    #[error("Sink Error: {message} {location}")]
    Sink {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode {
                message: error.to_string(),
                location: ErrorLocation::capture(),
            }
        } else {
            ApiError::Transport {
                message: error.to_string(),
                location: ErrorLocation::capture(),
            }
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::Url {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}
