use crate::error::api::ApiError;
use crate::session::Session;

use common::{ErrorLocation, HttpStatusCode};

use chrono::{DateTime, Utc};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};

const STATUS_ENDPOINT: &str = "status";
const WAIT_ENDPOINT: &str = "wait";
const PDF_ENDPOINT: &str = "pdf";

/// Handle to a rendering job running on the server.
///
/// The id is a server-defined opaque token. The handle keeps its own session
/// clone, so several handles derived from one session can be polled
/// concurrently; they address independent server-side resources.
#[derive(Clone, Debug)]
pub struct Job {
    id: String,
    session: Session,
}

impl Job {
    pub(crate) fn new(id: String, session: Session) -> Self {
        Self { id, session }
    }

    /// The server-assigned job identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The session this job re-issues authenticated calls through.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Ask the server how the job is doing, without blocking.
    ///
    /// A report with [`ProcessStatus::finished`] unset means the job is still
    /// running; its error fields carry no meaning until then.
    pub async fn status(&self) -> Result<ProcessStatus, ApiError> {
        let url = self
            .session
            .endpoint(&format!("{STATUS_ENDPOINT}/{}", self.id))?;

        let status: ProcessStatus = self.session.get_json(url).await?;
        trace!("job {}: finished={:?}", self.id, status.finished);
        Ok(status)
    }

    /// Block until the job reaches a terminal state.
    ///
    /// The server holds the connection open and answers only once rendering
    /// is done, so a success response always carries a finished timestamp.
    /// The call may take as long as the server needs; bound it through the
    /// transport (see [`Session::with_client`]) if you need a deadline.
    ///
    /// A finished job that reports rendering errors is still a successful
    /// wait; check [`ProcessStatus::succeeded`] before using the artifact.
    pub async fn wait(&self) -> Result<ProcessStatus, ApiError> {
        debug!("waiting for job {}", self.id);

        let url = self
            .session
            .endpoint(&format!("{WAIT_ENDPOINT}/{}", self.id))?;

        self.session.get_json(url).await
    }

    /// Stream the rendered PDF into `sink`, byte for byte.
    ///
    /// The body is copied verbatim with no transformation. A non-success
    /// response yields an error built from the status line; this endpoint is
    /// not guaranteed to produce a structured error body. Whether the
    /// artifact is meaningful when the job finished with errors is equally
    /// not guaranteed - check the process status first.
    pub async fn fetch_pdf<W>(&self, sink: &mut W) -> Result<(), ApiError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let url = self
            .session
            .endpoint(&format!("{PDF_ENDPOINT}/{}", self.id))?;

        let mut response = self.session.send_get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: HttpStatusCode(status.as_u16()),
                fault: None,
                message: status.to_string(),
                location: ErrorLocation::capture(),
            });
        }

        while let Some(chunk) = response.chunk().await? {
            sink.write_all(&chunk)
                .await
                .map_err(|source| ApiError::Sink {
                    message: source.to_string(),
                    location: ErrorLocation::capture(),
                })?;
        }

        Ok(())
    }
}

/// Server-reported progress of a job.
///
/// While `finished` is unset the job is still running and the error fields
/// carry no meaning; check [`is_finished`](Self::is_finished) first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessStatus {
    /// Completion time, absent while the job is still running.
    #[serde(rename = "Finished")]
    pub finished: Option<DateTime<Utc>>,

    /// Number of rendering problems of the finished run.
    #[serde(rename = "Errors", default)]
    pub errors: u32,

    /// Rendering problems in the order the server encountered them.
    #[serde(rename = "Errormessages", default)]
    pub error_messages: Vec<RenderMessage>,
}

impl ProcessStatus {
    /// Whether the job reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Whether the job finished without rendering problems.
    ///
    /// Only then is the artifact of [`Job::fetch_pdf`] guaranteed meaningful.
    pub fn succeeded(&self) -> bool {
        self.is_finished() && self.errors == 0
    }
}

/// One rendering problem reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderMessage {
    #[serde(default)]
    pub code: i32,

    #[serde(rename = "error", default)]
    pub message: String,
}
