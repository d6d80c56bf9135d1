//! Failure taxonomy for the evaluation page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends at the page: it is shown to the user as a blocking
//! notice and the page leaves for the tree home. Nothing is retried and
//! nothing propagates to a global handler.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Notice shown when the previous screen did not hand over an image key.
pub const MISSING_IMAGE_NOTICE: &str = "이미지 정보가 없습니다. 다시 시도해주세요.";

/// Fallback used when a failed response carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "잘못된 요청입니다.";

/// Prefix added to transport failure notices.
pub const TRANSPORT_NOTICE_PREFIX: &str = "평가 실패";

/// Errors produced while resolving inputs or requesting an evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// No image reference was handed over, so no request may be sent.
    #[error("image reference missing from navigation state")]
    PreconditionMissing,

    /// The server understood the request but refused it
    /// (not enough decorations, capacity reached, ...).
    #[error("evaluation rejected: {message}")]
    BusinessRejection { message: String },

    /// Network failure, timeout, non-2xx status or unreadable body.
    #[error("evaluation transport failed (status {status:?}): {message}")]
    Transport { status: Option<u16>, message: String },
}

impl EvaluationError {
    /// Build a transport error, substituting the generic fallback when the
    /// server gave no usable message.
    #[must_use]
    pub fn transport(status: Option<u16>, message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_owned();
        Self::Transport { status, message }
    }

    /// Build a business rejection, substituting the generic fallback for an
    /// absent or blank message.
    #[must_use]
    pub fn rejection(message: Option<&str>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_owned();
        Self::BusinessRejection { message }
    }

    /// User-facing text for the blocking notice.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::PreconditionMissing => MISSING_IMAGE_NOTICE.to_owned(),
            Self::BusinessRejection { message } => message.clone(),
            Self::Transport { message, .. } => format!("{TRANSPORT_NOTICE_PREFIX}: {message}"),
        }
    }
}
