use crate::convert::{FromText, ToText};
use crate::error::{Error, Result};
use crate::format;
use crate::store::core::SettingsStore;

use log::debug;

impl SettingsStore {
    /// Store a value under a key, encoded through [`ToText`].
    ///
    /// Strings are stored verbatim; booleans as `true`/`false`; floats in
    /// fixed notation with 6 fractional digits. On the first write of a key
    /// the entry is stamped with the current category
    /// (see [`set_category`](SettingsStore::set_category)).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the value has no text representation;
    /// nothing is written in that case.
    ///
    /// # Example
    ///
    /// ```
    /// # use settext::SettingsStore;
    /// let mut settings = SettingsStore::new();
    /// settings.set_value("title", "My Editor")?;
    /// settings.set_value("scale", 3.123456789)?;
    /// assert_eq!(settings.value("scale"), "3.123457");
    /// # Ok::<(), settext::Error>(())
    /// ```
    pub fn set_value<T: ToText>(&mut self, key: impl Into<String>, value: T) -> Result<()> {
        let key = key.into();
        let text = value.to_text().ok_or_else(|| Error::Encode(key.clone()))?;
        self.insert_text(key, text);
        Ok(())
    }

    /// Store a value under a key through a caller-supplied converter.
    ///
    /// This is how types the store knows nothing about (enums, wrappers)
    /// participate: the converter renders the value, the store keeps the
    /// resulting text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the converter returns `None`; the key
    /// is left absent, or unchanged if it already existed.
    ///
    /// # Example
    ///
    /// ```
    /// # use settext::SettingsStore;
    /// enum Mode { Read, Write }
    ///
    /// let mut settings = SettingsStore::new();
    /// settings.set_value_with("mode", Mode::Write, |mode| {
    ///     Some(match mode {
    ///         Mode::Read => "read".to_string(),
    ///         Mode::Write => "write".to_string(),
    ///     })
    /// })?;
    /// assert_eq!(settings.value("mode"), "write");
    /// # Ok::<(), settext::Error>(())
    /// ```
    pub fn set_value_with<T>(
        &mut self,
        key: impl Into<String>,
        value: T,
        convert: impl FnOnce(&T) -> Option<String>,
    ) -> Result<()> {
        let key = key.into();
        let text = convert(&value).ok_or_else(|| Error::Encode(key.clone()))?;
        self.insert_text(key, text);
        Ok(())
    }

    /// Fetch a value by key, decoded through [`FromText`].
    ///
    /// Decoding must consume the full stored text; `get_value::<String>`
    /// always succeeds for present keys and returns the raw text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] for absent keys and
    /// [`Error::Decode`] when the stored text is not a valid value of the
    /// requested type.
    pub fn get_value<T: FromText>(&self, key: &str) -> Result<T> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))?;

        T::from_text(&entry.value).ok_or_else(|| Error::Decode {
            key: key.to_string(),
            value: entry.value.clone(),
        })
    }

    /// Fetch a value by key through a caller-supplied converter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] for absent keys and
    /// [`Error::Decode`] when the converter returns `None`.
    pub fn get_value_with<T>(
        &self,
        key: &str,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))?;

        convert(&entry.value).ok_or_else(|| Error::Decode {
            key: key.to_string(),
            value: entry.value.clone(),
        })
    }

    /// Set the file-level description block written at the top of the saved
    /// file. Later calls replace the previous block.
    ///
    /// The text is reformatted on the spot: every line is prefixed with
    /// `"# "` and a trailing blank line separates the block from the first
    /// entry.
    pub fn set_description(&mut self, text: &str) {
        let mut block = format::comment_block(text);
        block.push('\n');
        self.file_description = block;
    }

    /// Attach a description to an existing key, emitted as a `#` comment
    /// directly above the entry on save.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] when the key does not exist; no
    /// entry is created.
    pub fn set_key_description(&mut self, key: &str, text: &str) -> Result<()> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))?;

        entry.description = text.to_string();
        Ok(())
    }

    /// Set the category stamped onto keys created from now on. Existing
    /// entries keep the category they were created under; pass `""` to
    /// return to uncategorized.
    pub fn set_category(&mut self, name: impl Into<String>) {
        self.current_category = name.into();
        debug!("Current category set to '{}'", self.current_category);
    }
}
