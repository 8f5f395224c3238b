//! Client library for a remote document-publishing service.
//!
//! The service renders a batch of uploaded files into a PDF asynchronously:
//! a publish call hands over the files and yields a job id, the job can be
//! polled or waited on, and the finished artifact is downloaded separately.
//!
//! ```no_run
//! # use publisher_client::{ClientError, Session};
//! # async fn run() -> Result<(), ClientError> {
//! let session = Session::new("api-token", "https://publish.example.com")?;
//!
//! let mut request = session.new_publish_request();
//! request.attach_file("layout.xml").await?;
//! request.attach_file("data.xml").await?;
//!
//! let job = session.publish(request).await?;
//! let status = job.wait().await?;
//!
//! if status.succeeded() {
//!     let mut artifact = Vec::new();
//!     job.fetch_pdf(&mut artifact).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A finished job that reports rendering errors is not a transport failure:
//! `wait` and `status` succeed whenever the exchange itself worked, and the
//! rendering outcome is read from [`ProcessStatus`].

pub mod config;
pub mod error;

mod classify;
mod job;
mod publish;
mod session;

#[cfg(test)]
mod tests;

pub use classify::ServerFault;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, ConfigError, RequestError, SessionError};
pub use job::{Job, ProcessStatus, RenderMessage};
pub use publish::{PublishFile, PublishRequest};
pub use session::Session;

/// Path segment appended to every base location.
pub const API_PREFIX: &str = "v0";

/// Version sentinel meaning "most recent".
///
/// Never reported by [`Session::available_versions`].
pub const DEFAULT_VERSION: &str = "latest";

pub(crate) const CLIENT_NAME: &str = "publisher-client";
pub(crate) const USER_AGENT: &str =
    const_format::concatcp!(CLIENT_NAME, "/", env!("CARGO_PKG_VERSION"));
