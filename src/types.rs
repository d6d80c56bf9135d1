//! Wire schema for `POST /tree/{tree_id}/evaluate`.
//!
//! DESIGN
//! ======
//! Response interpretation lives here rather than in each transport so the
//! browser (gloo-net) and terminal (reqwest) clients classify the same bytes
//! the same way: logical success, business rejection, or transport failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EvaluationError;
use crate::mode::Mode;

/// One evaluation request. Identity of the page's in-flight work is the
/// whole tuple: a change to any field starts a new request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvaluationRequest {
    pub tree_id: String,
    pub mode: Mode,
    pub image_key: String,
}

impl EvaluationRequest {
    /// Path and query of the evaluation resource, relative to the API base.
    #[must_use]
    pub fn path(&self) -> String {
        evaluate_path(&self.tree_id, self.mode)
    }

    /// JSON body sent with the request.
    #[must_use]
    pub fn body(&self) -> EvaluateBody<'_> {
        EvaluateBody { image_key: &self.image_key }
    }
}

/// Request body: `{ "imageKey": "..." }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBody<'a> {
    pub image_key: &'a str,
}

/// Evaluation payload returned on logical success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
}

/// Envelope wrapping every 2xx response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateEnvelope {
    is_success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<EvaluationResult>,
}

/// Body of a non-2xx response. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Build `/tree/{tree_id}/evaluate?mode={mode}`.
#[must_use]
pub fn evaluate_path(tree_id: &str, mode: Mode) -> String {
    format!("/tree/{tree_id}/evaluate?mode={}", mode.as_str())
}

/// Join an API base URL and the evaluation path.
#[must_use]
pub fn evaluate_url(base_url: &str, request: &EvaluationRequest) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), request.path())
}

/// Classify a completed HTTP exchange.
///
/// # Errors
///
/// - [`EvaluationError::BusinessRejection`] for a 2xx envelope with
///   `isSuccess: false`.
/// - [`EvaluationError::Transport`] for non-2xx statuses and bodies that do
///   not decode; its message prefers the body's `message` field.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<EvaluationResult, EvaluationError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .unwrap_or_default()
            .message;
        return Err(EvaluationError::transport(Some(status), message.as_deref()));
    }

    let envelope = serde_json::from_slice::<EvaluateEnvelope>(body).map_err(|error| {
        tracing::warn!(%status, %error, "evaluation response did not decode");
        EvaluationError::transport(Some(status), None)
    })?;

    if !envelope.is_success {
        return Err(EvaluationError::rejection(envelope.message.as_deref()));
    }

    envelope
        .data
        .ok_or_else(|| EvaluationError::transport(Some(status), envelope.message.as_deref()))
}
