//! Input resolution for the evaluation page.
//!
//! The page needs three things to start: the tree id from the path, the
//! mode from the query string, and the image hand-off from the previous
//! screen. The hand-off never travels in the URL; callers pass it in
//! explicitly so the page can run without a router.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::mode::Mode;
use crate::types::EvaluationRequest;

/// One-shot state carried over from the upload screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Opaque id of the uploaded tree image.
    #[serde(default)]
    pub image_key: Option<String>,
    /// Locally held image shown when the server sends none.
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Fully resolved page inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageInputs {
    pub tree_id: String,
    pub mode: Mode,
    pub image_key: String,
    pub preview_url: Option<String>,
}

impl PageInputs {
    /// Request body and routing key for these inputs.
    #[must_use]
    pub fn request(&self) -> EvaluationRequest {
        EvaluationRequest {
            tree_id: self.tree_id.clone(),
            mode: self.mode,
            image_key: self.image_key.clone(),
        }
    }
}

/// Resolve the page inputs.
///
/// `tree_id` is assumed to be router-validated. `mode_query` is the raw
/// `mode` query value. A missing hand-off, or one without a non-blank image
/// key, is a hard precondition failure.
///
/// # Errors
///
/// Returns [`EvaluationError::PreconditionMissing`] when no image key is
/// available.
pub fn resolve(
    tree_id: &str,
    mode_query: Option<&str>,
    state: Option<&NavigationState>,
) -> Result<PageInputs, EvaluationError> {
    let mode = Mode::from_query(mode_query);
    let state = state.ok_or(EvaluationError::PreconditionMissing)?;
    let image_key = state
        .image_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(EvaluationError::PreconditionMissing)?;
    let preview_url = state.preview_url.clone().filter(|url| !url.is_empty());

    Ok(PageInputs {
        tree_id: tree_id.to_owned(),
        mode,
        image_key: image_key.to_owned(),
        preview_url,
    })
}

/// Path of the tree home view that every exit from this page targets.
#[must_use]
pub fn tree_home_path(tree_id: &str) -> String {
    format!("/tree/{tree_id}")
}
