//! Sync toggle for a single slug widget.
//!
//! The host layer forwards input and toggle events here and writes back
//! whatever value is returned. `None` means the output field is left as is.

use crate::options::SlugOptions;
use crate::slugify::Slugifier;

/// Whether the output field follows the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Enabled,
    Disabled,
}

impl From<bool> for SyncState {
    fn from(checked: bool) -> Self {
        if checked {
            SyncState::Enabled
        } else {
            SyncState::Disabled
        }
    }
}

/// State of one bound widget instance.
#[derive(Debug, Clone)]
pub struct SlugState<'t> {
    slugifier: Slugifier<'t>,
    sync: SyncState,
    /// `false` when the page has no toggle control
    has_toggle: bool,
    original_value: String,
}

impl<'t> SlugState<'t> {
    pub fn new(slugifier: Slugifier<'t>, options: SlugOptions) -> Self {
        let sync = options
            .sync_enabled
            .map(SyncState::from)
            .unwrap_or(SyncState::Disabled);
        Self {
            slugifier,
            sync,
            has_toggle: options.sync_enabled.is_some(),
            original_value: options.original_value,
        }
    }

    pub fn sync(&self) -> SyncState {
        self.sync
    }

    pub fn is_enabled(&self) -> bool {
        self.sync == SyncState::Enabled
    }

    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    /// Input field changed. Returns the new slug while sync is enabled.
    pub fn on_input(&self, text: &str) -> Option<String> {
        match self.sync {
            SyncState::Enabled => Some(self.slugifier.slugify(text)),
            SyncState::Disabled => None,
        }
    }

    /// Toggle control clicked; `checked` is its state after the click.
    ///
    /// Turning sync on recomputes from `text` right away; turning it off
    /// restores the value the output field had at bind time. Without a
    /// toggle control the widget stays disabled and this is a no-op.
    pub fn on_toggle(&mut self, checked: bool, text: &str) -> Option<String> {
        if !self.has_toggle {
            return None;
        }
        let next = SyncState::from(checked);
        if next != self.sync {
            tracing::debug!(from = ?self.sync, to = ?next, "slug sync toggled");
        }
        self.sync = next;

        match next {
            SyncState::Enabled => Some(self.slugifier.slugify(text)),
            SyncState::Disabled => Some(self.original_value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(sync_enabled: Option<bool>) -> SlugState<'static> {
        SlugState::new(
            Slugifier::default(),
            SlugOptions::new(sync_enabled, "original-slug"),
        )
    }

    #[test]
    fn test_initial_state_follows_toggle() {
        assert_eq!(state(Some(true)).sync(), SyncState::Enabled);
        assert_eq!(state(Some(false)).sync(), SyncState::Disabled);
    }

    #[test]
    fn test_missing_toggle_never_syncs() {
        let st = state(None);
        assert!(!st.is_enabled());
        assert_eq!(st.on_input("Anything"), None);
    }

    #[test]
    fn test_missing_toggle_ignores_toggle_events() {
        let mut st = state(None);
        assert_eq!(st.on_toggle(true, "New Title"), None);
        assert_eq!(st.sync(), SyncState::Disabled);
        assert_eq!(st.on_input("New Title"), None);
    }

    #[test]
    fn test_enabled_recomputes_on_input() {
        let st = state(Some(true));
        assert_eq!(st.on_input("Hello World").as_deref(), Some("hello-world"));
        assert_eq!(st.on_input("Hello World!").as_deref(), Some("hello-world"));
    }

    #[test]
    fn test_disabled_ignores_input() {
        let st = state(Some(false));
        assert_eq!(st.on_input("Hello World"), None);
    }

    #[test]
    fn test_disable_restores_original() {
        let mut st = state(Some(true));
        st.on_input("New Title");
        assert_eq!(
            st.on_toggle(false, "New Title").as_deref(),
            Some("original-slug")
        );
        assert_eq!(st.sync(), SyncState::Disabled);
        assert_eq!(st.on_input("Newer Title"), None);
    }

    #[test]
    fn test_enable_recomputes_immediately() {
        let mut st = state(Some(false));
        assert_eq!(
            st.on_toggle(true, "Crème Brûlée").as_deref(),
            Some("creme-brulee")
        );
        assert!(st.is_enabled());
    }

    #[test]
    fn test_repeated_toggle_reapplies_effect() {
        let mut st = state(Some(true));
        assert_eq!(st.on_toggle(true, "Same").as_deref(), Some("same"));
        assert_eq!(
            st.on_toggle(false, "Same").as_deref(),
            Some("original-slug")
        );
        assert_eq!(
            st.on_toggle(false, "Same").as_deref(),
            Some("original-slug")
        );
    }
}
