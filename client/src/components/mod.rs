//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one state of the evaluation page from a prepared
//! `EvaluationView`; they hold no request logic.

pub mod evaluation_result;
pub mod loading_panel;
