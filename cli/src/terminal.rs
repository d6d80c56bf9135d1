//! Terminal stand-ins for the browser's alert dialog and router.

use std::cell::RefCell;

use tree_evaluation::{Navigator, Notifier};

/// Prints notices to stderr, where a browser would show a blocking alert.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("[!] {message}");
    }
}

/// Records the redirect target; the process exits instead of navigating.
#[derive(Default)]
pub struct ExitNavigator {
    target: RefCell<Option<String>>,
}

impl ExitNavigator {
    pub fn target(&self) -> Option<String> {
        self.target.borrow().clone()
    }
}

impl Navigator for ExitNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(%path, "leaving evaluation page");
        self.target.replace(Some(path.to_owned()));
    }
}
