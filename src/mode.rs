//! Evaluation tone selected by the `mode` query parameter.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use serde::{Deserialize, Serialize};

/// Server-side scoring tone. Changes wording and strictness, never the
/// response shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Mild,
    Spicy,
}

impl Mode {
    /// Parse the raw `mode` query value.
    ///
    /// Only the exact strings `mild` and `spicy` are recognized. Anything
    /// else, including an absent parameter, silently falls back to `Mild`.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("spicy") => Self::Spicy,
            _ => Self::Mild,
        }
    }

    /// Value sent back out in the `mode` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Spicy => "spicy",
        }
    }

    /// Display label used in the default result heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "순한맛",
            Self::Spicy => "매운맛",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
