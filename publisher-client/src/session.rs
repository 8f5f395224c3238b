use crate::classify;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::error::api::ApiError;
use crate::error::session::SessionError;
use crate::job::Job;
use crate::publish::{PublishReceipt, PublishRequest};
use crate::{API_PREFIX, DEFAULT_VERSION};

use common::{ErrorLocation, RedactedCredential};

use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const PUBLISH_ENDPOINT: &str = "publish";
const VERSIONS_ENDPOINT: &str = "versions";
const VERSION_PARAM: &str = "version";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated handle to the publishing service.
///
/// Cloning is cheap; clones share the underlying connection pool. Publish
/// requests and job handles keep their own clone, so handles stay usable
/// independently of the session they were derived from.
#[derive(Clone, Debug)]
pub struct Session {
    http: Client,
    base_url: Url,
    credential: RedactedCredential,
}

impl Session {
    /// Open a session against `base_location`, e.g.
    /// `https://publish.example.com`.
    ///
    /// The fixed API prefix is appended during normalization and the location
    /// is validated eagerly; no network traffic happens here.
    ///
    /// The default transport sets a connect timeout but no overall request
    /// deadline, because [`Job::wait`] may legitimately block for as long as
    /// the server needs. Use [`Session::with_client`] to impose one.
    pub fn new(credential: impl Into<String>, base_location: &str) -> Result<Self, SessionError> {
        let http = Client::builder()
            .user_agent(crate::USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Self::with_client(credential, base_location, http)
    }

    /// Open a session that issues requests through a caller-supplied client.
    ///
    /// This is the hook for custom deadlines, proxies, or TLS setups;
    /// cancellation of [`Job::wait`] is entirely the transport's concern.
    pub fn with_client(
        credential: impl Into<String>,
        base_location: &str,
        http: Client,
    ) -> Result<Self, SessionError> {
        let base_url = normalize_base_location(base_location)?;
        info!("session opened for {base_url}");

        Ok(Self {
            http,
            base_url,
            credential: RedactedCredential::new(credential.into()),
        })
    }

    /// Open a session from a validated [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(SessionError::from)?;

        Ok(Self::with_client(
            config.credential.expose(),
            &config.base_location,
            http,
        )?)
    }

    /// Service location including the API prefix.
    pub fn base_location(&self) -> &str {
        self.base_url.as_str()
    }

    /// Start an empty publish request bound to this session.
    pub fn new_publish_request(&self) -> PublishRequest {
        PublishRequest::new(self.clone())
    }

    /// Submit an accumulated publish request.
    ///
    /// The server either accepts the whole batch and starts a rendering job
    /// (HTTP 201) or rejects it; there is no partial success. Any non-201
    /// response - other 2xx included - is classified into an [`ApiError`].
    pub async fn publish(&self, request: PublishRequest) -> Result<Job, ApiError> {
        let mut url = self.endpoint(PUBLISH_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair(VERSION_PARAM, request.version());

        debug!("POST {url} ({} files)", request.files().len());

        let response = self
            .authenticated(self.http.post(url))
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(classify::error_from_response(response).await);
        }

        let receipt: PublishReceipt = response.json().await?;
        info!("publish accepted as job {}", receipt.id);

        Ok(Job::new(receipt.id, self.clone()))
    }

    /// List the version identifiers selectable on publish.
    ///
    /// The [`DEFAULT_VERSION`](crate::DEFAULT_VERSION) sentinel is a
    /// client-side convention and is filtered out even if the server were to
    /// report it.
    pub async fn available_versions(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(VERSIONS_ENDPOINT)?;
        let mut versions: Vec<String> = self.get_json(url).await?;
        versions.retain(|version| version != DEFAULT_VERSION);
        Ok(versions)
    }

    // ── Internal helpers ────────────────────────────────────────────

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        // Credential as username, empty password; the transport performs the
        // Basic-Auth encoding.
        request.basic_auth(self.credential.expose(), Some(""))
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Non-2xx responses are classified before any decoding is attempted.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.send_get(url).await?;

        if !response.status().is_success() {
            return Err(classify::error_from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// GET `url` with authentication, returning the raw response.
    pub(crate) async fn send_get(&self, url: Url) -> Result<Response, ApiError> {
        debug!("GET {url}");
        Ok(self.authenticated(self.http.get(url)).send().await?)
    }
}

/// Append the API prefix and validate the result.
///
/// The normalized URL keeps a trailing slash so endpoint joins are pure
/// suffixes (`…/v0/` + `status/{id}`).
fn normalize_base_location(base_location: &str) -> Result<Url, SessionError> {
    let trimmed = base_location.trim_end_matches('/');
    let base_url = Url::parse(&format!("{trimmed}/{API_PREFIX}/"))?;

    if base_url.cannot_be_a_base() {
        return Err(SessionError::InvalidBaseLocation {
            message: format!("{base_location} cannot carry endpoint paths"),
            location: ErrorLocation::capture(),
        });
    }

    Ok(base_url)
}
