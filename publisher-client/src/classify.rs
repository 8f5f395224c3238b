//! Mapping non-success responses to the error taxonomy.
//!
//! The policy: 404 means the addressed resource does not exist, 422 is a
//! structured validation rejection, everything else non-2xx is a generic
//! server failure with a best-effort decode of the structured body.
//! Classification always happens before endpoint-specific decoding.

use crate::error::api::ApiError;

use common::{ErrorLocation, HttpStatusCode};

use log::warn;
use serde::{Deserialize, Serialize};

const STATUS_NOT_FOUND: u16 = 404;
const STATUS_UNPROCESSABLE: u16 = 422;

/// Structured error body the service attaches to rejections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFault {
    /// Machine-readable problem category.
    #[serde(rename = "type", default)]
    pub fault_type: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Detail", default)]
    pub detail: String,

    /// The request path the fault refers to.
    #[serde(rename = "Instance", default)]
    pub instance: String,

    #[serde(rename = "RequestID", default)]
    pub request_id: Option<i64>,
}

impl std::fmt::Display for ServerFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.fault_type)
        } else {
            write!(f, "{}", self.title)
        }
    }
}

/// Classify a non-success status and its body.
///
/// Pure, so the policy table is unit-testable without a transport.
#[track_caller]
pub(crate) fn classify_status(status: HttpStatusCode, body: &str) -> ApiError {
    match status.0 {
        STATUS_NOT_FOUND => ApiError::NotFound {
            location: ErrorLocation::capture(),
        },
        STATUS_UNPROCESSABLE => match serde_json::from_str::<ServerFault>(body) {
            Ok(fault) => ApiError::Validation {
                fault,
                location: ErrorLocation::capture(),
            },
            Err(decode_error) => {
                warn!("validation body did not decode: {decode_error}");
                ApiError::Server {
                    status,
                    fault: None,
                    message: fallback_message(status, body),
                    location: ErrorLocation::capture(),
                }
            }
        },
        _ => {
            let fault = serde_json::from_str::<ServerFault>(body).ok();
            let message = match &fault {
                Some(fault) if !fault.title.is_empty() => fault.title.clone(),
                _ => fallback_message(status, body),
            };

            ApiError::Server {
                status,
                fault,
                message,
                location: ErrorLocation::capture(),
            }
        }
    }
}

/// Drain a response body and classify it.
pub(crate) async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = HttpStatusCode(response.status().as_u16());
    let body = response.text().await.unwrap_or_default();
    classify_status(status, &body)
}

fn fallback_message(status: HttpStatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status} with empty body")
    } else {
        trimmed.to_string()
    }
}
