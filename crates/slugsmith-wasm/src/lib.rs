use slugsmith::{SlugOptions, SlugState, Slugifier};
use wasm_bindgen::prelude::*;

/// Transliterate + strip + collapse separators + lowercase.
#[wasm_bindgen]
pub fn slugify(text: &str) -> String {
    slugsmith::slugify(text)
}

/// Throws if `slug` is blank or contains whitespace.
#[wasm_bindgen(js_name = validateSlug)]
pub fn validate_slug(slug: &str) -> Result<(), JsError> {
    slugsmith::slug::validate(slug).map_err(|e| JsError::new(&format!("Invalid slug: {}", e)))
}

/// One bound slug widget. The page forwards its input and toggle events
/// here and writes any returned string into the slug field.
#[wasm_bindgen]
pub struct SlugWidget {
    inner: SlugState<'static>,
}

#[wasm_bindgen]
impl SlugWidget {
    /// Create a widget from `{syncEnabled?, originalValue?}`.
    ///
    /// Omit `syncEnabled` when the page has no toggle control.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SlugWidget, JsError> {
        let options: SlugOptions = if options.is_undefined() || options.is_null() {
            SlugOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("Invalid widget options: {}", e)))?
        };
        Ok(Self {
            inner: SlugState::new(Slugifier::default(), options),
        })
    }

    /// Input field changed. Returns the new slug, or `undefined` while sync is off.
    pub fn input(&self, text: &str) -> Option<String> {
        self.inner.on_input(text)
    }

    /// Toggle clicked. Returns the value to write into the slug field.
    pub fn toggle(&mut self, checked: bool, text: &str) -> Option<String> {
        self.inner.on_toggle(checked, text)
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    #[wasm_bindgen(getter, js_name = originalValue)]
    pub fn original_value(&self) -> String {
        self.inner.original_value().to_owned()
    }

    /// Release this widget. Other widgets on the page are unaffected.
    pub fn destroy(self) {}
}
