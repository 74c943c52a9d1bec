use crate::error::{Error, Result};
use crate::format;
use crate::store::core::{Entry, SettingsStore};

use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

impl SettingsStore {
    /// Load entries from a settings file, replacing the current contents.
    ///
    /// Comment lines (including `####` category headers and per-key
    /// comments) and blank lines are skipped: categories and descriptions
    /// are write-only metadata, so every loaded entry is uncategorized and
    /// undescribed. A key that appears twice keeps the later value.
    ///
    /// # Errors
    ///
    /// - [`Error::FileRead`] when the file cannot be opened or read; the
    ///   store is left untouched.
    /// - [`Error::MissingDelimiter`] when a non-comment line has no
    ///   key/value delimiter. The load aborts and the store's entries are
    ///   cleared, discarding any partial progress.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.entries.clear();

        for (index, raw) in content.lines().enumerate() {
            let line = format::trim(raw);

            if line.is_empty() || format::is_comment(line) {
                continue;
            }

            let Some((key, value)) = format::split_entry(line) else {
                self.entries.clear();
                return Err(Error::MissingDelimiter {
                    line: index + 1,
                    content: line.to_string(),
                });
            };

            self.entries.insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ..Entry::default()
                },
            );
        }

        info!(
            "Loaded {} settings from '{}'",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the store to a settings file.
    ///
    /// The file starts with the description block, followed by one section
    /// per category in ascending lexicographic order (uncategorized entries
    /// first), keys sorted within each section. Saving never mutates the
    /// store, and repeated saves of an unmodified store are byte-identical.
    ///
    /// The content is written to a temporary sibling file and renamed into
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] when the destination cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.render();

        let file_name = path.file_name().ok_or_else(|| Error::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ),
        })?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        fs::write(&temp_path, &content).map_err(|e| Error::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, path).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(
            "Saved {} settings to '{}'",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Render the whole store in file format.
    ///
    /// The sorted category/key view is rebuilt here on every call; entries
    /// are mutated far more often than they are saved, so nothing orders
    /// them incrementally.
    fn render(&self) -> String {
        let mut grouped: BTreeMap<&str, BTreeMap<&str, &Entry>> = BTreeMap::new();
        for (key, entry) in &self.entries {
            grouped
                .entry(entry.category.as_str())
                .or_default()
                .insert(key.as_str(), entry);
        }

        let mut out = String::new();
        out.push_str(&self.file_description);

        for (category, entries) in &grouped {
            out.push('\n');
            if !category.is_empty() {
                out.push_str(format::CATEGORY_HEADER);
                out.push(format::DELIMITER);
                out.push_str(category);
                out.push('\n');
            }
            for (key, entry) in entries {
                if !entry.description.is_empty() {
                    out.push_str(&format::comment_block(&entry.description));
                }
                out.push_str(key);
                out.push(format::DELIMITER);
                out.push_str(&entry.value);
                out.push('\n');
            }
        }

        out
    }
}
