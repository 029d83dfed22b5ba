/// Per-widget configuration captured when the host binds an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SlugOptions {
    /// Checked state of the sync toggle at bind time. `None` when the page
    /// has no toggle control, in which case sync is never enabled.
    pub sync_enabled: Option<bool>,
    /// Value of the output field at bind time, restored when sync is turned off.
    pub original_value: String,
}

impl SlugOptions {
    pub fn new(sync_enabled: Option<bool>, original_value: impl Into<String>) -> Self {
        Self {
            sync_enabled,
            original_value: original_value.into(),
        }
    }
}
