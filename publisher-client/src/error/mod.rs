pub mod api;
pub mod config;
pub mod request;
pub mod session;

pub use api::ApiError;
pub use config::ConfigError;
pub use request::RequestError;
pub use session::SessionError;

use thiserror::Error;

/// Umbrella over every failure this crate reports.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] api::ApiError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Request(#[from] request::RequestError),

    #[error(transparent)]
    Session(#[from] session::SessionError),
}
