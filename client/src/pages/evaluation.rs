//! Evaluation page: requests the AI evaluation of a decorated tree and
//! renders the result.
//!
//! ARCHITECTURE
//! ============
//! Route params (`uuid`), the `mode` query, and the hand-off recorded for
//! that `uuid` are offered to an `EvaluationMachine` from one effect. The
//! hand-off is looked up again on every route change, so a hand-off written
//! for another tree counts as missing. The machine decides
//! whether to dispatch; dispatches run in a `spawn_local` task whose outcome
//! is fed back through the ticket it was issued.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every exit from this page (missing hand-off, rejection, transport failure)
//! shows a blocking alert and navigates to `/tree/{uuid}`.
//!
//! TRADE-OFFS
//! ==========
//! Fetch has no cancellation here. A late response is dropped instead: the
//! `alive` flag is cleared on cleanup and the machine rejects tickets from an
//! older generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use tree_evaluation::page::{Begin, leave};
use tree_evaluation::{EvaluationApi, EvaluationMachine, PageState};

use crate::components::evaluation_result::EvaluationResultPanel;
use crate::components::loading_panel::LoadingPanel;
use crate::net::api::GlooEvaluationApi;
use crate::state::handoff::HandoffState;
use crate::util::browser::{AlertNotifier, RouterNavigator};

/// Evaluation page for `/tree/:uuid/evaluation?mode=mild|spicy`.
///
/// `handoff` is the image state written by the upload screen; without an
/// image key for the current `uuid` the page redirects immediately and sends
/// nothing.
#[component]
pub fn EvaluationPage(handoff: RwSignal<HandoffState>) -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();
    let machine = StoredValue::new(EvaluationMachine::default());
    let page_state = RwSignal::new(PageState::Loading);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            let _ = machine.try_update_value(EvaluationMachine::unmount);
        });
    }

    let tree_id = move || params.read().get("uuid").unwrap_or_default();
    let mode_query = move || query.read().get("mode");

    Effect::new(move || {
        let tree_id = tree_id();
        let mode_query = mode_query();
        let state = handoff.with_untracked(|h| h.for_tree(&tree_id));
        let Some(begin) =
            machine.try_update_value(|m| m.begin(&tree_id, mode_query.as_deref(), state.as_ref()))
        else {
            return;
        };

        match begin {
            Begin::AlreadyDispatched => {}
            Begin::Redirect(redirect) => {
                page_state.set(PageState::Redirecting(redirect.clone()));
                leave(&AlertNotifier, &RouterNavigator(navigate.clone()), &redirect);
            }
            Begin::Dispatch(ticket) => {
                page_state.set(PageState::Loading);
                let alive = alive.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = GlooEvaluationApi::default().evaluate(&ticket.request()).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    let Some(next) = machine
                        .try_update_value(|m| m.complete(&ticket, outcome).cloned())
                        .flatten()
                    else {
                        return;
                    };
                    page_state.set(next.clone());
                    if let PageState::Redirecting(redirect) = next {
                        leave(&AlertNotifier, &RouterNavigator(navigate), &redirect);
                    }
                });
            }
        }
    });

    view! {
        <div class="app-shell">
            <section class="nes-container is-rounded panel">
                {move || match page_state.get() {
                    PageState::Success(evaluation) => {
                        view! { <EvaluationResultPanel evaluation=evaluation/> }.into_any()
                    }
                    PageState::Loading | PageState::Redirecting(_) => {
                        view! { <LoadingPanel/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
