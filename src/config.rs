//! Evaluation API configuration.
//!
//! The terminal client fills this from flags backed by `TREE_API_BASE_URL`,
//! `TREE_API_REQUEST_TIMEOUT_SECS` and `TREE_API_CONNECT_TIMEOUT_SECS`; the
//! browser client uses the defaults.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.beour.store";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ApiTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeouts: ApiTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl ApiConfig {
    /// Default config with an optional base URL override. Blank values are
    /// ignored and trailing slashes trimmed.
    #[must_use]
    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, ..Self::default() }
    }

    #[must_use]
    pub fn with_timeouts(self, timeouts: ApiTimeouts) -> Self {
        Self { timeouts, ..self }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
