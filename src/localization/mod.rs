//! Localization of catalog keys and page strings.
//!
//! This module provides the [`Localizer`], the function mapping a phrase key
//! to a user-facing display string in the active language. Built-in bundles
//! exist for English and Spanish; a TOML override file can replace or extend
//! individual phrases without rebuilding the plugin.
//!
//! # Resolution order
//!
//! 1. Override table loaded from the configured TOML file
//! 2. Built-in bundle for the active locale
//! 3. Built-in English bundle
//! 4. The key itself (missing phrases are echoed, never an error)
//!
//! # Override file format
//!
//! ```toml
//! "pronounsPage.pronouns" = "Pronouns (they're important!)"
//! "common.noResultsFound" = "Nothing matched"
//! ```

mod phrases;

use crate::domain::error::{Result, ZprofileError};
use std::collections::HashMap;
use std::path::Path;

/// Built-in locales with bundled phrase tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (reference bundle, always complete).
    #[default]
    English,
    /// Spanish.
    Spanish,
}

impl Locale {
    /// Resolves a locale from its configuration name.
    ///
    /// Accepts ISO codes (`en`, `es`). Returns `None` for unknown names so
    /// the caller can log and fall back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }

    fn builtin(self, key: &str) -> Option<&'static str> {
        match self {
            Self::English => phrases::english(key),
            Self::Spanish => phrases::spanish(key),
        }
    }
}

/// Maps phrase keys to display strings in the active locale.
///
/// Cheap to clone-free lookup, no caching: display text is always resolved
/// at filter time so a locale change invalidates nothing.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    locale: Locale,
    overrides: HashMap<String, String>,
}

impl Localizer {
    /// Creates a localizer for a built-in locale with no overrides.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Creates a localizer with phrase overrides loaded from a TOML file.
    ///
    /// The file holds a flat table of phrase key to string. Overrides take
    /// precedence over the built-in bundles.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a flat TOML
    /// table of strings.
    pub fn with_overrides(locale: Locale, path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = toml::from_str(&contents)
            .map_err(|e| ZprofileError::Locale(format!("failed to parse {}: {e}", path.display())))?;

        tracing::debug!(
            path = %path.display(),
            override_count = overrides.len(),
            "loaded locale overrides"
        );

        Ok(Self { locale, overrides })
    }

    /// Resolves a phrase key to its display string.
    ///
    /// Unknown keys are echoed back verbatim rather than treated as errors,
    /// which keeps missing translations visible without breaking the UI.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        if let Some(phrase) = self.overrides.get(key) {
            return phrase.clone();
        }
        self.locale
            .builtin(key)
            .or_else(|| Locale::English.builtin(key))
            .map_or_else(|| key.to_string(), ToString::to_string)
    }

    /// Resolves the display text for a pronoun catalog key.
    #[must_use]
    pub fn pronoun_text(&self, catalog_key: &str) -> String {
        self.translate(&format!("pronouns.{catalog_key}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pronouns;
    use std::io::Write;

    #[test]
    fn english_bundle_covers_the_whole_catalog() {
        for key in pronouns::enumerate() {
            assert!(
                Locale::English.builtin(&format!("pronouns.{key}")).is_some(),
                "missing english phrase for {key}"
            );
        }
    }

    #[test]
    fn spanish_falls_back_to_english_for_untranslated_pronouns() {
        let localizer = Localizer::new(Locale::Spanish);
        assert_eq!(localizer.pronoun_text("heHimHis"), "He / Him / His");
        assert_eq!(localizer.pronoun_text("callMeByMyName"), "Llámame por mi nombre");
    }

    #[test]
    fn unknown_keys_are_echoed() {
        let localizer = Localizer::new(Locale::English);
        assert_eq!(localizer.translate("pronouns.notAKey"), "pronouns.notAKey");
    }

    #[test]
    fn locale_names_resolve() {
        assert_eq!(Locale::from_name("en"), Some(Locale::English));
        assert_eq!(Locale::from_name("es"), Some(Locale::Spanish));
        assert_eq!(Locale::from_name("fr"), None);
    }

    #[test]
    fn overrides_take_precedence_over_builtins() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "\"pronounsPage.pronouns\" = \"Pronoun picker\"").expect("write");

        let localizer =
            Localizer::with_overrides(Locale::English, file.path()).expect("load overrides");
        assert_eq!(localizer.translate("pronounsPage.pronouns"), "Pronoun picker");
        assert_eq!(localizer.translate("common.noResultsFound"), "No results found");
    }

    #[test]
    fn invalid_override_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "not valid toml [").expect("write");

        assert!(Localizer::with_overrides(Locale::English, file.path()).is_err());
    }
}
