use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("Config Environment Error: {name} is not set {location}")]
    MissingVariable {
        location: ErrorLocation,
        name: &'static str,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}
