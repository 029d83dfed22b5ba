use slugsmith::{Slug, SlugOptions};

#[test]
fn options_deserialize_camel_case() {
    let opts: SlugOptions =
        serde_json::from_str(r#"{"syncEnabled": true, "originalValue": "my-post"}"#).unwrap();
    assert_eq!(opts, SlugOptions::new(Some(true), "my-post"));
}

#[test]
fn options_missing_fields_default() {
    let opts: SlugOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, SlugOptions::default());
    assert_eq!(opts.sync_enabled, None);
}

#[test]
fn slug_serializes_as_plain_string() {
    let slug: Slug = serde_json::from_str(r#""my-post""#).unwrap();
    assert_eq!(serde_json::to_string(&slug).unwrap(), r#""my-post""#);
}

#[test]
fn slug_deserialize_validates() {
    assert!(serde_json::from_str::<Slug>(r#""my post""#).is_err());
    assert!(serde_json::from_str::<Slug>(r#""""#).is_err());
}
