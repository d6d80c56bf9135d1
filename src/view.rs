//! Render-ready view model for the evaluation page.
//!
//! The Leptos page and the terminal renderer both draw from these values,
//! so fallbacks (heading, image) are decided once.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt::Write as _;

use serde::Serialize;

use crate::input::{PageInputs, tree_home_path};
use crate::mode::Mode;
use crate::page::PageState;
use crate::types::EvaluationResult;

pub const LOADING_HEADLINE: &str = "AI가 트리를 분석하고 있습니다...";
pub const LOADING_WAIT_HINT: &str = "잠시만 기다려주세요! (약 5~10초 소요)";
pub const LOADING_PROGRESS_VALUE: u8 = 50;
pub const LOADING_PROGRESS_MAX: u8 = 100;

pub const IMAGE_ALT: &str = "최종 트리";
pub const SCORE_LABEL: &str = "총점";
pub const SCORE_UNIT: &str = "점";
pub const SUMMARY_LABEL: &str = "AI 한줄평";
pub const COMMENTS_LABEL: &str = "상세 분석";
pub const BACK_LABEL: &str = "트리로 돌아가기";

/// Everything the success state displays, in display order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    pub heading: String,
    pub image_src: Option<String>,
    pub score: f64,
    pub summary: String,
    pub comments: Vec<String>,
    /// Target of the single "back to tree" control.
    pub home_path: String,
}

impl EvaluationView {
    /// Combine a server result with the page inputs.
    ///
    /// The heading falls back to a mode-derived default and the image to the
    /// carried-over preview URL.
    #[must_use]
    pub fn build(result: EvaluationResult, inputs: &PageInputs) -> Self {
        let heading = result
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| default_heading(inputs.mode));
        let image_src = result
            .image_url
            .filter(|url| !url.is_empty())
            .or_else(|| inputs.preview_url.clone());

        Self {
            heading,
            image_src,
            score: result.score,
            summary: result.summary,
            comments: result.comments,
            home_path: tree_home_path(&inputs.tree_id),
        }
    }

    /// Score without a trailing `.0` for whole numbers.
    #[must_use]
    pub fn score_text(&self) -> String {
        format_score(self.score)
    }
}

/// `평가 결과 (순한맛)` / `평가 결과 (매운맛)`.
#[must_use]
pub fn default_heading(mode: Mode) -> String {
    format!("평가 결과 ({})", mode.label())
}

fn format_score(score: f64) -> String {
    format!("{score}")
}

/// Plain-text rendering used by the terminal client.
///
/// `Redirecting` renders nothing: the notice and navigation are side
/// effects, not page content.
#[must_use]
pub fn render_text(state: &PageState) -> String {
    let mut out = String::new();
    match state {
        PageState::Loading => {
            let _ = writeln!(out, "{LOADING_HEADLINE}");
            let _ = writeln!(out, "{LOADING_WAIT_HINT}");
            let _ = writeln!(out, "[{LOADING_PROGRESS_VALUE}/{LOADING_PROGRESS_MAX}]");
        }
        PageState::Success(view) => {
            let _ = writeln!(out, "{}", view.heading);
            if let Some(src) = &view.image_src {
                let _ = writeln!(out, "[{IMAGE_ALT}] {src}");
            }
            let _ = writeln!(out, "{SCORE_LABEL}: {} {SCORE_UNIT}", view.score_text());
            let _ = writeln!(out, "{SUMMARY_LABEL}: {}", view.summary);
            if !view.comments.is_empty() {
                let _ = writeln!(out, "{COMMENTS_LABEL}:");
                for comment in &view.comments {
                    let _ = writeln!(out, "  - {comment}");
                }
            }
            let _ = writeln!(out, "[{BACK_LABEL}] {}", view.home_path);
        }
        PageState::Redirecting(_) => {}
    }
    out
}
