//! Progress indicator shown while the evaluation request is in flight.

use leptos::prelude::*;
use tree_evaluation::view::{LOADING_HEADLINE, LOADING_PROGRESS_MAX, LOADING_PROGRESS_VALUE, LOADING_WAIT_HINT};

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <p class="nes-text is-dark">{LOADING_HEADLINE}</p>
        <p>{LOADING_WAIT_HINT}</p>
        <progress
            class="nes-progress is-dark"
            value=LOADING_PROGRESS_VALUE.to_string()
            max=LOADING_PROGRESS_MAX.to_string()
        ></progress>
    }
}
