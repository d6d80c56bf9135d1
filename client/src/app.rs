//! Root application component with routing and the hand-off context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::evaluation::EvaluationPage;
use crate::state::handoff::HandoffState;

/// Root application component.
///
/// Provides the hand-off context the upload screen writes into, and routes
/// `/tree/:uuid/evaluation` to the evaluation page with that hand-off passed
/// as an explicit prop. The server-side document shell belongs to the host
/// application that mounts `App`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let handoff = RwSignal::new(HandoffState::default());
    provide_context(handoff);

    view! {
        <Stylesheet id="leptos" href="/pkg/tree-evaluation.css"/>
        <Title text="트리 평가"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("tree"), ParamSegment("uuid"), StaticSegment("evaluation"))
                    view=move || view! { <EvaluationPage handoff=handoff/> }
                />
            </Routes>
        </Router>
    }
}
