#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use tree_evaluation::NavigationState;

/// Image hand-off written by the upload screen before it navigates to the
/// evaluation route. Provided as `RwSignal<HandoffState>` context.
///
/// A hand-off belongs to the tree it was written for; the evaluation page of
/// any other tree sees no hand-off at all.
#[derive(Clone, Debug, Default)]
pub struct HandoffState {
    pending: Option<(String, NavigationState)>,
}

impl HandoffState {
    /// Record the uploaded image for the next evaluation page of `tree_id`.
    pub fn hand_off(&mut self, tree_id: &str, image_key: String, preview_url: Option<String>) {
        self.pending = Some((
            tree_id.to_owned(),
            NavigationState {
                image_key: Some(image_key),
                preview_url,
            },
        ));
    }

    /// Hand-off for `tree_id`, or `None` when it was written for another tree.
    #[must_use]
    pub fn for_tree(&self, tree_id: &str) -> Option<NavigationState> {
        self.pending
            .as_ref()
            .filter(|(owner, _)| owner == tree_id)
            .map(|(_, state)| state.clone())
    }
}
