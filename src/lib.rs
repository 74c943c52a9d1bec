//! # settext - Text Settings Store
//!
//! A small, framework-agnostic key-value settings store with typed
//! accessors and a human-editable text file format.
//!
//! ## Features
//!
//! - **Typed Access**: Store and fetch scalars through the
//!   [`ToText`]/[`FromText`] conversion pair (booleans as `true`/`false`,
//!   floats in fixed 6-digit notation, strings verbatim)
//! - **Caller Converters**: Bridge arbitrary types (e.g. enums) with plain
//!   closures, no trait impl required
//! - **Categories**: Group entries under `####` section headers in the
//!   saved file via a write-time category cursor
//! - **Descriptions**: A file-level comment block and per-key `#` comments
//!   for self-documenting settings files
//! - **Deterministic Saves**: Categories and keys are sorted on save, so
//!   repeated saves are byte-identical and diff-friendly
//!
//! ## Quick Start
//!
//! ```
//! use settext::SettingsStore;
//!
//! let mut settings = SettingsStore::new();
//! settings.set_description("Editor configuration.\nEdit freely, one 'key value' pair per line.");
//!
//! settings.set_value("title", "My Editor")?;
//! settings.set_key_description("title", "Shown in the window title bar")?;
//!
//! settings.set_category("window");
//! settings.set_value("width", 1280)?;
//! settings.set_value("height", 720)?;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("settings.txt");
//! settings.save(&path)?;
//!
//! let mut reloaded = SettingsStore::new();
//! reloaded.load(&path)?;
//! let width: u32 = reloaded.get_value("width")?;
//! assert_eq!(width, 1280);
//! # Ok::<(), settext::Error>(())
//! ```
//!
//! ## File Format
//!
//! ```text
//! # Editor configuration.
//! # Edit freely, one 'key value' pair per line.
//!
//!
//! # Shown in the window title bar
//! title My Editor
//!
//! #### window
//! height 720
//! width 1280
//! ```
//!
//! Every section is preceded by a blank line; the description block carries
//! its own separating blank line on top of that. The first space on a line
//! separates key and value, so values may contain spaces but keys must not.
//! Lines starting with `#` are skipped on load: descriptions and category
//! headers are write-only metadata and are not restored by
//! [`SettingsStore::load`].
//!
//! ## Custom Types
//!
//! Types the store does not know about participate through converter
//! closures:
//!
//! ```
//! use settext::SettingsStore;
//!
//! #[derive(Debug, PartialEq)]
//! enum Theme { Light, Dark }
//!
//! let mut settings = SettingsStore::new();
//! settings.set_value_with("theme", Theme::Dark, |theme| {
//!     Some(match theme {
//!         Theme::Light => "light".to_string(),
//!         Theme::Dark => "dark".to_string(),
//!     })
//! })?;
//!
//! let theme = settings.get_value_with("theme", |text| match text {
//!     "light" => Some(Theme::Light),
//!     "dark" => Some(Theme::Dark),
//!     _ => None,
//! })?;
//! assert_eq!(theme, Theme::Dark);
//! # Ok::<(), settext::Error>(())
//! ```

// Core modules
mod convert;
mod error;
mod format;
mod store;

// Re-exports from core
pub use convert::{FromText, ToText};
pub use error::{Error, Result};
pub use store::SettingsStore;
