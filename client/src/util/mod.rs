//! Browser-facing helpers.

pub mod browser;
