//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the evaluation requester over the browser fetch API.
//! Wire types and response classification come from `tree-evaluation`.

pub mod api;
