//! Shared model and page logic for the tree evaluation screen.
//!
//! This crate owns everything about the evaluation page that does not depend
//! on a particular UI runtime or HTTP transport: resolving the page inputs,
//! the wire schema of `POST /tree/{id}/evaluate`, the requester seam, the
//! page state machine, and the render-ready view model. The Leptos page in
//! `client/` and the terminal driver in `cli/` are both thin shells over it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The evaluation itself is computed by a remote service. The page triggers
//! exactly one request per `(tree_id, mode, image_key)` tuple and then either
//! renders the result or redirects back to the tree home.

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod mode;
pub mod notice;
pub mod page;
pub mod types;
pub mod view;

pub use api::EvaluationApi;
pub use error::EvaluationError;
pub use input::{NavigationState, PageInputs};
pub use mode::Mode;
pub use notice::{Navigator, Notifier};
pub use page::{EvaluationMachine, EvaluationPage, PageState, Redirect};
pub use types::{EvaluationRequest, EvaluationResult};
pub use view::EvaluationView;
