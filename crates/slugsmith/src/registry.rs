use std::collections::HashMap;

use crate::options::SlugOptions;
use crate::slugify::Slugifier;
use crate::sync::SlugState;

/// Bound widget instances keyed by element id.
///
/// Instances share the slugifier (and so the substitution table) but no
/// mutable state.
#[derive(Debug, Clone)]
pub struct WidgetRegistry<'t> {
    slugifier: Slugifier<'t>,
    widgets: HashMap<String, SlugState<'t>>,
}

impl<'t> WidgetRegistry<'t> {
    pub fn new(slugifier: Slugifier<'t>) -> Self {
        Self {
            slugifier,
            widgets: HashMap::new(),
        }
    }

    /// Bind a widget to `id`. An already bound id keeps its existing state.
    pub fn bind(&mut self, id: impl Into<String>, options: SlugOptions) -> &mut SlugState<'t> {
        let slugifier = self.slugifier;
        let id = id.into();
        self.widgets.entry(id).or_insert_with_key(|id| {
            tracing::debug!(widget = %id, "slug widget bound");
            SlugState::new(slugifier, options)
        })
    }

    /// Detach the widget bound to `id`. Returns `false` if nothing was bound.
    pub fn destroy(&mut self, id: &str) -> bool {
        let removed = self.widgets.remove(id).is_some();
        if removed {
            tracing::debug!(widget = %id, "slug widget destroyed");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&SlugState<'t>> {
        self.widgets.get(id)
    }

    pub fn on_input(&self, id: &str, text: &str) -> Option<String> {
        self.widgets.get(id)?.on_input(text)
    }

    pub fn on_toggle(&mut self, id: &str, checked: bool, text: &str) -> Option<String> {
        self.widgets.get_mut(id)?.on_toggle(checked, text)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry<'static> {
    fn default() -> Self {
        WidgetRegistry::new(Slugifier::default())
    }
}
