use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    /// The base location is not a usable absolute URL.
    #[error("Base Location Error: {message} {location}")]
    InvalidBaseLocation {
        message: String,
        location: ErrorLocation,
    },

    /// The HTTP client could not be constructed.
    #[error("Transport Setup Error: {message} {location}")]
    TransportSetup {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for SessionError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        SessionError::InvalidBaseLocation {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}

impl From<reqwest::Error> for SessionError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        SessionError::TransportSetup {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}
