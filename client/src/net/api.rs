//! Evaluation requester for the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that reports a transport failure, since the
//! evaluation request is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to an `EvaluationError`; the page turns it into a
//! notice and a redirect instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tree_evaluation::config::ApiConfig;
use tree_evaluation::{EvaluationApi, EvaluationError, EvaluationRequest, EvaluationResult};

#[cfg(any(test, not(feature = "hydrate")))]
const SERVER_UNAVAILABLE_MESSAGE: &str = "not available on server";

/// `gloo-net` backed requester bound to one API base URL.
#[derive(Clone, Debug)]
pub struct GlooEvaluationApi {
    base_url: String,
}

impl GlooEvaluationApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GlooEvaluationApi {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

#[async_trait::async_trait(?Send)]
impl EvaluationApi for GlooEvaluationApi {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, EvaluationError> {
        #[cfg(feature = "hydrate")]
        {
            use tree_evaluation::types::{evaluate_url, interpret_response};

            let url = evaluate_url(&self.base_url, request);
            log::debug!("evaluation request: url={url} imageKey={}", request.image_key);

            let resp = gloo_net::http::Request::post(&url)
                .json(&request.body())
                .map_err(|e| {
                    log::error!("evaluation request body failed to encode: {e}");
                    EvaluationError::transport(None, None)
                })?
                .send()
                .await
                .map_err(|e| {
                    log::error!("evaluation request failed: {e}");
                    EvaluationError::transport(None, None)
                })?;
            let status = resp.status();
            let body = resp
                .binary()
                .await
                .map_err(|_| EvaluationError::transport(Some(status), None))?;
            interpret_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, request);
            Err(EvaluationError::transport(None, Some(SERVER_UNAVAILABLE_MESSAGE)))
        }
    }
}
