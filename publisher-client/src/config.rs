//! Environment-driven client configuration.

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedCredential};

use std::env;
use std::time::Duration;

use log::info;

/// Environment variable holding the service base location.
pub const ENV_BASE_LOCATION: &str = "PUBLISHER_URL";

/// Environment variable holding the access credential.
pub const ENV_CREDENTIAL: &str = "PUBLISHER_TOKEN";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport and credential settings a [`Session`](crate::Session) is built
/// from.
///
/// Deliberately not serializable: the credential refuses serialization, so a
/// config dump cannot leak it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Service location without the API prefix.
    pub base_location: String,

    pub credential: RedactedCredential,

    /// Deadline for establishing connections. Requests themselves carry no
    /// overall deadline; the wait call is a server-side long poll.
    pub connect_timeout: Duration,

    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(credential: impl Into<String>, base_location: impl Into<String>) -> Self {
        Self {
            base_location: base_location.into(),
            credential: RedactedCredential::new(credential.into()),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: crate::USER_AGENT.to_string(),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// A `.env` file in the working directory is honored when present.
    /// Requires [`ENV_BASE_LOCATION`] and [`ENV_CREDENTIAL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_location = require_var(ENV_BASE_LOCATION)?;
        let credential = require_var(ENV_CREDENTIAL)?;

        info!("configuration loaded from environment");
        Ok(Self::new(credential, base_location))
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_location.is_empty() {
            return Err(ConfigError::ValidationError {
                reason: "base location cannot be empty".to_string(),
                location: ErrorLocation::capture(),
            });
        }

        if !self.base_location.starts_with("http://")
            && !self.base_location.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                reason: format!("base location must be http(s): {}", self.base_location),
                location: ErrorLocation::capture(),
            });
        }

        if self.credential.is_empty() {
            return Err(ConfigError::ValidationError {
                reason: "credential cannot be empty".to_string(),
                location: ErrorLocation::capture(),
            });
        }

        Ok(())
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVariable {
        name,
        location: ErrorLocation::capture(),
    })
}
