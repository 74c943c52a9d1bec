//! Common test utilities for settext integration tests
//!
//! Provides shared fixtures and file readback helpers.

#![allow(dead_code)]

use settext::SettingsStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that provides a temporary directory and a settings file path
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture with logging wired up
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self { temp_dir }
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join("settings.txt")
    }

    /// Write raw content to the settings file, bypassing the store
    pub fn write_settings_file(&self, content: &str) {
        std::fs::write(self.settings_path(), content).expect("Failed to write settings file");
    }

    /// Read the raw settings file content
    pub fn read_settings_file(&self) -> String {
        std::fs::read_to_string(self.settings_path()).expect("Failed to read settings file")
    }

    /// Save a store to the fixture's settings file and return the raw bytes
    pub fn save_to_string(&self, store: &SettingsStore) -> String {
        store
            .save(self.settings_path())
            .expect("Failed to save store");
        self.read_settings_file()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Store Builders
// =============================================================================

/// A store with uncategorized, description-free string entries only
pub fn plain_store() -> SettingsStore {
    let mut store = SettingsStore::new();
    store.set_value("title", "My Editor").unwrap();
    store.set_value("language", "en").unwrap();
    store.set_value("greeting", "hello world").unwrap();
    store
}

/// A store exercising categories and both description kinds
pub fn decorated_store() -> SettingsStore {
    let mut store = SettingsStore::new();
    store.set_description("Example settings");

    store.set_value("title", "My Editor").unwrap();
    store
        .set_key_description("title", "Shown in the window title bar")
        .unwrap();

    store.set_category("window");
    store.set_value("width", 1280).unwrap();
    store.set_value("height", 720).unwrap();

    store.set_category("network");
    store.set_value("host", "example.org").unwrap();

    store
}
