//! `reqwest` transport for the evaluation endpoint.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use tree_evaluation::config::ApiConfig;
use tree_evaluation::types::{evaluate_url, interpret_response};
use tree_evaluation::{EvaluationApi, EvaluationError, EvaluationRequest, EvaluationResult};

pub struct HttpEvaluationApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpEvaluationApi {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }
}

#[async_trait::async_trait(?Send)]
impl EvaluationApi for HttpEvaluationApi {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult, EvaluationError> {
        let url = evaluate_url(&self.base_url, request);
        tracing::debug!(%url, image_key = %request.image_key, "sending evaluation request");

        let response = self
            .http
            .post(&url)
            .json(&request.body())
            .send()
            .await
            .map_err(|error| {
                tracing::warn!(%url, %error, timeout = error.is_timeout(), "evaluation request failed");
                EvaluationError::transport(error.status().map(|s| s.as_u16()), None)
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|error| {
            tracing::warn!(%url, %status, %error, "evaluation response body unreadable");
            EvaluationError::transport(Some(status), None)
        })?;

        interpret_response(status, &body)
    }
}
