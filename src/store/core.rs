use std::collections::HashMap;
use std::ops::Index;

use log::debug;

/// One stored setting: the canonical text value plus write-time metadata.
///
/// `category` is stamped when the entry is first created and never changes
/// afterward; `value` and `description` stay mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) value: String,
    pub(crate) category: String,
    pub(crate) description: String,
}

/// In-memory key-value settings store with a human-editable text file format.
///
/// The store keeps every value as text and converts on access:
///
/// - **Typed Access**: `set_value` / `get_value` via the
///   [`ToText`](crate::ToText) / [`FromText`](crate::FromText) traits
/// - **Caller Converters**: `set_value_with` / `get_value_with` bridge
///   arbitrary types (e.g. enums) through plain closures
/// - **Categories**: a write-time cursor groups entries under `####`
///   section headers in the saved file
/// - **Descriptions**: a file-level comment block plus optional per-key
///   comments, emitted on save and skipped on load
/// - **Deterministic Output**: categories and keys are sorted on save, so
///   repeated saves of the same state are byte-identical
///
/// # Example
///
/// ```
/// use settext::SettingsStore;
///
/// let mut settings = SettingsStore::new();
/// settings.set_category("window");
/// settings.set_value("width", 1280)?;
/// settings.set_value("height", 720)?;
///
/// let width: u32 = settings.get_value("width")?;
/// assert_eq!(width, 1280);
///
/// # let dir = tempfile::tempdir().unwrap();
/// settings.save(dir.path().join("settings.txt"))?;
/// # Ok::<(), settext::Error>(())
/// ```
///
/// Mutation requires `&mut self`; embedders that share a store across
/// threads serialize access externally, e.g. behind one `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    /// Stored entries. Iteration order is irrelevant; save recomputes the
    /// output order from scratch.
    pub(crate) entries: HashMap<String, Entry>,

    /// Category stamped onto entries created from now on.
    pub(crate) current_category: String,

    /// File-level comment block, kept pre-formatted (see `set_description`).
    pub(crate) file_description: String,
}

impl SettingsStore {
    /// Create an empty store with no category cursor and no description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text for a key, or `""` when the key is absent.
    ///
    /// This is the non-failing lookup; use
    /// [`get_value`](SettingsStore::get_value) when missing keys must be
    /// distinguishable from empty values.
    pub fn value(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", |entry| entry.value.as_str())
    }

    /// Check whether a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Category a key was created under, or `None` when the key is absent.
    /// Uncategorized entries report `Some("")`.
    pub fn category_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.category.as_str())
    }

    /// Description attached to a key, or `None` when the key is absent.
    /// Entries without an annotation report `Some("")`.
    pub fn description_of(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.description.as_str())
    }

    /// Remove all entries and reset the category cursor and file
    /// description, returning the store to its freshly constructed state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_category.clear();
        self.file_description.clear();
        debug!("Settings store cleared");
    }

    /// Store raw text under a key. First write stamps the current category;
    /// later writes only replace the value.
    pub(crate) fn insert_text(&mut self, key: String, value: String) {
        use std::collections::hash_map;

        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut slot) => slot.get_mut().value = value,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(Entry {
                    value,
                    category: self.current_category.clone(),
                    description: String::new(),
                });
            }
        }
    }
}

/// Indexing mirrors [`value`](SettingsStore::value): missing keys yield `""`.
impl<'k> Index<&'k str> for SettingsStore {
    type Output = str;

    fn index(&self, key: &'k str) -> &str {
        self.value(key)
    }
}
