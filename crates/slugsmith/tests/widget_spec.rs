use slugsmith::{
    slugify, Slug, SlugOptions, Slugifier, SubstitutionTable, SyncState, WidgetRegistry,
};

/// Simulates a page with a title field, a slug field and a sync checkbox.
struct Page {
    title: String,
    slug_field: String,
}

impl Page {
    fn apply(&mut self, update: Option<String>) {
        if let Some(value) = update {
            self.slug_field = value;
        }
    }
}

#[test]
fn typing_with_sync_enabled_updates_slug_field() {
    let mut registry = WidgetRegistry::default();
    let mut page = Page {
        title: String::new(),
        slug_field: "existing-post".into(),
    };
    registry.bind("post", SlugOptions::new(Some(true), page.slug_field.clone()));

    for ch in "Über Café".chars() {
        page.title.push(ch);
        let update = registry.on_input("post", &page.title);
        page.apply(update);
    }
    assert_eq!(page.slug_field, "uber-cafe");

    // Uncheck: field reverts to what it held at bind time
    let update = registry.on_toggle("post", false, &page.title);
    page.apply(update);
    assert_eq!(page.slug_field, "existing-post");

    // Typing while disabled leaves the field alone
    page.title.push_str(" Society");
    let update = registry.on_input("post", &page.title);
    page.apply(update);
    assert_eq!(page.slug_field, "existing-post");

    // Re-check: recomputed immediately, no keystroke needed
    let update = registry.on_toggle("post", true, &page.title);
    page.apply(update);
    assert_eq!(page.slug_field, "uber-cafe-society");
    assert_eq!(registry.get("post").unwrap().sync(), SyncState::Enabled);
}

#[test]
fn page_without_toggle_never_syncs() {
    let mut registry = WidgetRegistry::default();
    registry.bind("post", SlugOptions::new(None, "kept"));
    assert_eq!(registry.on_input("post", "New Title"), None);
    assert_eq!(registry.on_toggle("post", true, "New Title"), None);
    assert!(!registry.get("post").unwrap().is_enabled());
}

#[test]
fn destroyed_widget_stops_responding() {
    let mut registry = WidgetRegistry::default();
    registry.bind("a", SlugOptions::new(Some(true), ""));
    registry.bind("b", SlugOptions::new(Some(true), ""));
    registry.destroy("a");

    assert_eq!(registry.on_input("a", "Title"), None);
    assert_eq!(registry.on_input("b", "Title").as_deref(), Some("title"));

    // Rebinding after destroy picks up fresh options
    registry.bind("a", SlugOptions::new(Some(false), "fresh"));
    assert_eq!(registry.get("a").unwrap().original_value(), "fresh");
}

#[test]
fn registry_with_custom_table() {
    let table = SubstitutionTable::from_pairs([('ä', "ae"), ('ö', "oe"), ('ü', "ue")]).unwrap();
    let mut registry = WidgetRegistry::new(Slugifier::new(&table));
    registry.bind("de", SlugOptions::new(Some(true), ""));
    assert_eq!(
        registry.on_input("de", "Grüße aus Köln").as_deref(),
        Some("grueße-aus-koeln")
    );
}

#[test]
fn derived_slugs_validate() {
    for title in ["Hello, World! #1", "Жёлтый дом", "Price: 5 ₣", "100元"] {
        let derived = slugify(title);
        assert!(Slug::parse(derived.clone()).is_ok(), "{title:?} -> {derived:?}");
    }
    assert!(Slug::from_title("你好").is_err());
}
