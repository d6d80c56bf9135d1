//! Evaluation page state machine and its driver.
//!
//! ARCHITECTURE
//! ============
//! `EvaluationMachine` is pure: it decides transitions and hands out tickets
//! for requests but performs no I/O. `EvaluationPage` wraps it with the
//! injected requester, notifier and navigator for runtimes that can await
//! in place (the terminal client, tests). The Leptos page drives the machine
//! directly from an effect and a `spawn_local` task.
//!
//! STATES
//! ======
//! `Loading -> Success | Redirecting`. `Redirecting` is terminal for the
//! page. `Success` holds until the identifying tuple changes, which restarts
//! at `Loading`.
//!
//! STALE RESPONSES
//! ===============
//! Each dispatch bumps a generation counter and the ticket remembers it.
//! Completing a ticket from an older generation, or after `unmount`, is a
//! no-op, so a late response can never overwrite newer state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::api::EvaluationApi;
use crate::error::EvaluationError;
use crate::input::{self, NavigationState, PageInputs, tree_home_path};
use crate::mode::Mode;
use crate::notice::{Navigator, Notifier};
use crate::types::{EvaluationRequest, EvaluationResult};
use crate::view::EvaluationView;

/// Where the page is in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum PageState {
    Loading,
    Success(EvaluationView),
    Redirecting(Redirect),
}

/// Exit from the page: show `notice`, then navigate to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub notice: String,
}

/// Permission to send one request and later report its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    inputs: PageInputs,
}

impl Ticket {
    #[must_use]
    pub fn request(&self) -> EvaluationRequest {
        self.inputs.request()
    }
}

/// Result of offering inputs to the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Begin {
    /// New tuple: send exactly one request for this ticket.
    Dispatch(Ticket),
    /// Same tuple as the last offer, in flight or completed; nothing to do.
    AlreadyDispatched,
    /// Precondition failed; no request may be sent.
    Redirect(Redirect),
}

type InputKey = (String, Mode, Option<String>);

/// Transition logic for one mounted page.
#[derive(Debug)]
pub struct EvaluationMachine {
    state: PageState,
    last_key: Option<InputKey>,
    generation: u64,
    mounted: bool,
}

impl Default for EvaluationMachine {
    fn default() -> Self {
        Self {
            state: PageState::Loading,
            last_key: None,
            generation: 0,
            mounted: true,
        }
    }
}

impl EvaluationMachine {
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Offer the current route inputs.
    ///
    /// Resolves them, checks the image-key precondition, and dispatches at
    /// most once per distinct `(tree_id, mode, image_key)`.
    pub fn begin(
        &mut self,
        tree_id: &str,
        mode_query: Option<&str>,
        handoff: Option<&NavigationState>,
    ) -> Begin {
        let mode = Mode::from_query(mode_query);
        let image_key = handoff.and_then(|state| state.image_key.clone());
        let key = (tree_id.to_owned(), mode, image_key);
        if self.last_key.as_ref() == Some(&key) {
            return Begin::AlreadyDispatched;
        }
        self.last_key = Some(key);
        self.generation = self.generation.wrapping_add(1);

        match input::resolve(tree_id, mode_query, handoff) {
            Ok(inputs) => {
                tracing::debug!(tree_id, %mode, generation = self.generation, "dispatching evaluation");
                self.state = PageState::Loading;
                Begin::Dispatch(Ticket {
                    generation: self.generation,
                    inputs,
                })
            }
            Err(error) => {
                tracing::warn!(tree_id, %error, "evaluation page opened without image reference");
                let redirect = Redirect {
                    target: tree_home_path(tree_id),
                    notice: error.notice(),
                };
                self.state = PageState::Redirecting(redirect.clone());
                Begin::Redirect(redirect)
            }
        }
    }

    /// Report the outcome of a dispatched ticket.
    ///
    /// Returns `None` when the ticket is stale and the outcome was dropped.
    /// Every failure kind redirects to the tree home; only the notice text
    /// differs.
    pub fn complete(
        &mut self,
        ticket: &Ticket,
        outcome: Result<EvaluationResult, EvaluationError>,
    ) -> Option<&PageState> {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                mounted = self.mounted,
                "dropping stale evaluation response"
            );
            return None;
        }

        self.state = match outcome {
            Ok(result) => PageState::Success(EvaluationView::build(result, &ticket.inputs)),
            Err(error) => {
                tracing::warn!(tree_id = %ticket.inputs.tree_id, %error, "evaluation failed");
                PageState::Redirecting(Redirect {
                    target: tree_home_path(&ticket.inputs.tree_id),
                    notice: error.notice(),
                })
            }
        };
        Some(&self.state)
    }

    /// Invalidate every outstanding ticket.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Machine plus injected capabilities, for runtimes that await in place.
pub struct EvaluationPage<A, N, V> {
    api: A,
    notifier: N,
    navigator: V,
    machine: EvaluationMachine,
}

impl<A, N, V> EvaluationPage<A, N, V>
where
    A: EvaluationApi,
    N: Notifier,
    V: Navigator,
{
    pub fn new(api: A, notifier: N, navigator: V) -> Self {
        Self {
            api,
            notifier,
            navigator,
            machine: EvaluationMachine::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageState {
        self.machine.state()
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Mount or re-render with the given inputs.
    ///
    /// Sends at most one request per distinct tuple, then shows the notice
    /// and navigates away on any failure.
    pub async fn load(
        &mut self,
        tree_id: &str,
        mode_query: Option<&str>,
        handoff: Option<&NavigationState>,
    ) -> &PageState {
        let begin = self.begin(tree_id, mode_query, handoff);
        self.settle(begin).await
    }

    /// First half of `load`: offer the inputs without doing any I/O.
    ///
    /// Callers that show their own loading indicator check for
    /// `Begin::Dispatch` here before calling `settle`.
    pub fn begin(
        &mut self,
        tree_id: &str,
        mode_query: Option<&str>,
        handoff: Option<&NavigationState>,
    ) -> Begin {
        self.machine.begin(tree_id, mode_query, handoff)
    }

    /// Second half of `load`: send the dispatched request, if any, and leave
    /// the page on failure.
    pub async fn settle(&mut self, begin: Begin) -> &PageState {
        match begin {
            Begin::AlreadyDispatched => {}
            Begin::Redirect(redirect) => leave(&self.notifier, &self.navigator, &redirect),
            Begin::Dispatch(ticket) => {
                let request = ticket.request();
                let outcome = self.api.evaluate(&request).await;
                let redirect = match self.machine.complete(&ticket, outcome) {
                    Some(PageState::Redirecting(redirect)) => Some(redirect.clone()),
                    _ => None,
                };
                if let Some(redirect) = redirect {
                    leave(&self.notifier, &self.navigator, &redirect);
                }
            }
        }
        self.machine.state()
    }

    pub fn unmount(&mut self) {
        self.machine.unmount();
    }
}

/// Perform a redirect: blocking notice first, then navigation.
pub fn leave(notifier: &impl Notifier, navigator: &impl Navigator, redirect: &Redirect) {
    notifier.notify(&redirect.notice);
    navigator.navigate(&redirect.target);
}
