//! Requester seam between the page and the evaluation service.
//!
//! The browser client implements this over `gloo-net` and the terminal
//! client over `reqwest`; tests implement it with in-memory fakes.

use crate::error::EvaluationError;
use crate::types::{EvaluationRequest, EvaluationResult};

/// Issues one evaluation request. Implementations must not retry.
///
/// The trait is `?Send` because browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait EvaluationApi {
    /// Send `POST /tree/{tree_id}/evaluate?mode={mode}` with the image key.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::BusinessRejection`] when the service
    /// refuses the evaluation and [`EvaluationError::Transport`] for every
    /// network or HTTP-level failure.
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, EvaluationError>;
}
