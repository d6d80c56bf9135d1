//! Success state of the evaluation page.
//!
//! Renders, in order: heading, tree image, score, one-line summary, the
//! detail comments, and the single button back to the tree home.

#[cfg(test)]
#[path = "evaluation_result_test.rs"]
mod evaluation_result_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tree_evaluation::EvaluationView;
use tree_evaluation::view::{BACK_LABEL, COMMENTS_LABEL, IMAGE_ALT, SCORE_LABEL, SCORE_UNIT, SUMMARY_LABEL};

/// Pair each comment with a stable key. Order is preserved.
fn comment_rows(comments: &[String]) -> Vec<(usize, String)> {
    comments.iter().cloned().enumerate().collect()
}

#[component]
pub fn EvaluationResultPanel(evaluation: EvaluationView) -> impl IntoView {
    let navigate = use_navigate();
    let home_path = evaluation.home_path.clone();
    let on_back = move |_| navigate(&home_path, NavigateOptions::default());

    let score = evaluation.score_text();
    let rows = comment_rows(&evaluation.comments);

    view! {
        <h3 class="evaluation__heading">{evaluation.heading}</h3>

        <div class="nes-container is-rounded evaluation__image">
            {evaluation.image_src.map(|src| view! { <img src=src alt=IMAGE_ALT/> })}
        </div>

        <h3 class="evaluation__score">
            {SCORE_LABEL}": "
            <span class="nes-text is-error">{score}</span>
            " "{SCORE_UNIT}
        </h3>

        <div class="nes-container is-rounded evaluation__summary">
            <p class="evaluation__summary-label">{SUMMARY_LABEL}</p>
            <p>{evaluation.summary}</p>
        </div>

        <div class="nes-container with-title is-rounded evaluation__comments">
            <p class="title">{COMMENTS_LABEL}</p>
            <ul class="nes-list is-disc">
                {rows
                    .into_iter()
                    .map(|(idx, comment)| view! { <li data-index=idx.to_string()>{comment}</li> })
                    .collect_view()}
            </ul>
        </div>

        <div class="btn-row">
            <button class="nes-btn" on:click=on_back>
                {BACK_LABEL}
            </button>
        </div>
    }
}
