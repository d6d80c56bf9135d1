//! Browser implementations of the page's notice and navigation seams.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos_router::NavigateOptions;
use tree_evaluation::{Navigator, Notifier};

/// Blocking notice via `window.alert`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}

/// Adapts a router `navigate` function (from `use_navigate`) to [`Navigator`].
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
