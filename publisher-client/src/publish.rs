use crate::DEFAULT_VERSION;
use crate::error::api::ApiError;
use crate::error::request::RequestError;
use crate::job::Job;
use crate::session::Session;

use common::ErrorLocation;

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

/// A batch of named files to be rendered in one publishing run.
///
/// Files are applied by the server in attachment order; by convention the
/// layout file comes first, but the client does not enforce any ordering
/// semantics beyond preserving it. Submission consumes the request.
#[derive(Clone, Debug, Serialize)]
pub struct PublishRequest {
    #[serde(skip)]
    session: Session,
    #[serde(skip)]
    version: String,
    files: Vec<PublishFile>,
}

impl PublishRequest {
    pub(crate) fn new(session: Session) -> Self {
        Self {
            session,
            version: DEFAULT_VERSION.to_string(),
            files: Vec::new(),
        }
    }

    /// Read `path` and append its contents under the final path component.
    ///
    /// The server has no concept of source directories, so only the file
    /// name survives. On a read failure the file list is left untouched.
    /// The content is not inspected or size-limited here.
    pub async fn attach_file(&mut self, path: impl AsRef<Path>) -> Result<(), RequestError> {
        let path = path.as_ref();

        let filename = path
            .file_name()
            .ok_or_else(|| RequestError::NoFileName {
                path: path.to_path_buf(),
                location: ErrorLocation::capture(),
            })?
            .to_string_lossy()
            .into_owned();

        let contents =
            tokio::fs::read(path)
                .await
                .map_err(|source| RequestError::FileRead {
                    path: path.to_path_buf(),
                    source,
                    location: ErrorLocation::capture(),
                })?;

        debug!("attached {filename} ({} bytes)", contents.len());
        self.files.push(PublishFile { filename, contents });
        Ok(())
    }

    /// Append an in-memory payload without touching the filesystem.
    pub fn attach_bytes(&mut self, filename: impl Into<String>, contents: Vec<u8>) {
        self.files.push(PublishFile {
            filename: filename.into(),
            contents,
        });
    }

    /// Select a server-side version.
    ///
    /// The default sentinel [`DEFAULT_VERSION`](crate::DEFAULT_VERSION) means
    /// "most recent".
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Attached files in submission order.
    pub fn files(&self) -> &[PublishFile] {
        &self.files
    }

    /// Submit through the session this request was created from.
    ///
    /// Equivalent to [`Session::publish`].
    pub async fn submit(self) -> Result<Job, ApiError> {
        let session = self.session.clone();
        session.publish(self).await
    }
}

/// One named payload of a publish request.
///
/// Contents travel base64-encoded inside the JSON body and survive the
/// round trip byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishFile {
    pub filename: String,
    #[serde(with = "base64_bytes")]
    pub contents: Vec<u8>,
}

/// Creation response of an accepted publish.
#[derive(Debug, Deserialize)]
pub(crate) struct PublishReceipt {
    #[serde(rename = "Id", alias = "id")]
    pub(crate) id: String,
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(&encoded).map_err(serde::de::Error::custom)
    }
}
