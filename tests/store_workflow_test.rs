//! Store Workflow Integration Tests
//!
//! Tests for the in-memory accessor lifecycle:
//! - Typed set/get through the conversion traits
//! - Caller-supplied converter closures
//! - Raw text lookup and indexing
//! - Category and description metadata
//! - Clear behavior

mod common;

use settext::{Error, SettingsStore};

// =============================================================================
// Typed Accessors
// =============================================================================

#[test]
fn test_set_and_get_typed_values() {
    let mut store = SettingsStore::new();

    store.set_value("count", 42).unwrap();
    store.set_value("ratio", 0.25).unwrap();
    store.set_value("enabled", true).unwrap();
    store.set_value("name", "deep thought").unwrap();

    assert_eq!(store.get_value::<i32>("count").unwrap(), 42);
    assert_eq!(store.get_value::<f64>("ratio").unwrap(), 0.25);
    assert!(store.get_value::<bool>("enabled").unwrap());
    assert_eq!(store.get_value::<String>("name").unwrap(), "deep thought");
}

#[test]
fn test_float_stored_with_six_fractional_digits() {
    let mut store = SettingsStore::new();

    store.set_value("x", 3.123456789).unwrap();

    assert_eq!(store.value("x"), "3.123457");
}

#[test]
fn test_bool_stored_as_literal() {
    let mut store = SettingsStore::new();

    store.set_value("b", true).unwrap();

    assert_eq!(store.value("b"), "true");
    assert!(store.get_value::<bool>("b").unwrap());
}

#[test]
fn test_set_value_overwrites() {
    let mut store = SettingsStore::new();

    store.set_value("k", 1).unwrap();
    store.set_value("k", 2).unwrap();

    assert_eq!(store.get_value::<i32>("k").unwrap(), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_get_value_wrong_type_fails() {
    let mut store = SettingsStore::new();
    store.set_value("name", "not a number").unwrap();

    let result = store.get_value::<i32>("name");

    assert!(matches!(result, Err(Error::Decode { .. })));
    // The raw text is still available through the string path.
    assert_eq!(store.get_value::<String>("name").unwrap(), "not a number");
}

#[test]
fn test_get_value_rejects_trailing_garbage() {
    let mut store = SettingsStore::new();
    store.set_value("n", "12 monkeys").unwrap();

    assert!(store.get_value::<i32>("n").is_err());
}

// =============================================================================
// Missing Keys
// =============================================================================

#[test]
fn test_get_value_missing_key() {
    let store = SettingsStore::new();

    let result = store.get_value::<i32>("nope");

    assert!(result.as_ref().unwrap_err().is_not_found());
    let result = store.get_value::<String>("nope");
    assert!(result.is_err());
}

#[test]
fn test_value_missing_key_returns_empty() {
    let store = SettingsStore::new();

    assert_eq!(store.value("nope"), "");
    assert_eq!(&store["nope"], "");
}

#[test]
fn test_index_returns_raw_text() {
    let mut store = SettingsStore::new();
    store.set_value("greeting", "hello world").unwrap();

    assert_eq!(&store["greeting"], "hello world");
}

// =============================================================================
// Converter Closures
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
    System,
}

fn theme_to_text(theme: &Theme) -> Option<String> {
    Some(
        match theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
        .to_string(),
    )
}

fn theme_from_text(text: &str) -> Option<Theme> {
    match text {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        "system" => Some(Theme::System),
        _ => None,
    }
}

#[test]
fn test_converter_roundtrip() {
    let mut store = SettingsStore::new();

    store
        .set_value_with("theme", Theme::System, theme_to_text)
        .unwrap();

    assert_eq!(store.value("theme"), "system");
    let theme = store.get_value_with("theme", theme_from_text).unwrap();
    assert_eq!(theme, Theme::System);
}

#[test]
fn test_failing_set_converter_leaves_key_absent() {
    let mut store = SettingsStore::new();

    let result = store.set_value_with("theme", Theme::Dark, |_| None);

    assert!(matches!(result, Err(Error::Encode(_))));
    assert!(!store.contains_key("theme"));
}

#[test]
fn test_failing_set_converter_leaves_previous_value() {
    let mut store = SettingsStore::new();
    store.set_value("theme", "dark").unwrap();

    let result = store.set_value_with("theme", Theme::Light, |_| None);

    assert!(result.is_err());
    assert_eq!(store.value("theme"), "dark");
}

#[test]
fn test_failing_get_converter() {
    let mut store = SettingsStore::new();
    store.set_value("theme", "mauve").unwrap();

    let result = store.get_value_with("theme", theme_from_text);

    assert!(matches!(result, Err(Error::Decode { .. })));
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_category_stamped_on_first_write() {
    let mut store = SettingsStore::new();

    store.set_value("loose", 0).unwrap();
    store.set_category("window");
    store.set_value("width", 1280).unwrap();

    assert_eq!(store.category_of("loose"), Some(""));
    assert_eq!(store.category_of("width"), Some("window"));
    assert_eq!(store.category_of("nope"), None);
}

#[test]
fn test_category_fixed_after_creation() {
    let mut store = SettingsStore::new();

    store.set_category("a");
    store.set_value("k", 1).unwrap();
    store.set_category("b");
    store.set_value("k", 2).unwrap();

    // The value moved, the category did not.
    assert_eq!(store.get_value::<i32>("k").unwrap(), 2);
    assert_eq!(store.category_of("k"), Some("a"));
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn test_key_description_requires_existing_key() {
    let mut store = SettingsStore::new();

    let result = store.set_key_description("ghost", "haunting");

    assert!(result.as_ref().unwrap_err().is_not_found());
    assert!(!store.contains_key("ghost"));
}

#[test]
fn test_key_description_is_pure_metadata() {
    let mut store = SettingsStore::new();
    store.set_value("k", 7).unwrap();

    store.set_key_description("k", "a lucky number").unwrap();

    assert_eq!(store.description_of("k"), Some("a lucky number"));
    assert_eq!(store.get_value::<i32>("k").unwrap(), 7);
}

// =============================================================================
// Clear and Inspection
// =============================================================================

#[test]
fn test_clear_resets_everything() {
    let mut store = common::decorated_store();
    assert!(!store.is_empty());

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    // The category cursor is reset too: new keys are uncategorized.
    store.set_value("k", 1).unwrap();
    assert_eq!(store.category_of("k"), Some(""));
}

#[test]
fn test_keys_iteration() {
    let store = common::plain_store();

    let mut keys: Vec<&str> = store.keys().collect();
    keys.sort_unstable();

    assert_eq!(keys, vec!["greeting", "language", "title"]);
}
