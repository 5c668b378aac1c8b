//! Personal-details snapshot delivered by the profile store.
//!
//! This module defines [`PersonalDetails`], the inbound profile snapshot the
//! pane reads its saved selection from. The pane never mutates a snapshot
//! directly; it proposes a new value through the store and receives a fresh
//! snapshot back.

use crate::domain::pronouns;
use serde::{Deserialize, Serialize};

/// The current user's profile data, as delivered by the store.
///
/// Both fields are optional: `login` is absent while the app-level data is
/// still loading, and a missing `pronouns` value simply means "no selection"
/// (safe-get semantics, not an error).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    /// Login of the current user, `None` until app data has resolved.
    #[serde(default)]
    pub login: Option<String>,

    /// Saved pronoun preference as a fully-qualified identifier
    /// (e.g. `__predefined_heHimHis`), `None` or empty for no selection.
    #[serde(default)]
    pub pronouns: Option<String>,
}

impl PersonalDetails {
    /// Returns the saved fully-qualified identifier, defaulting to `""`.
    #[must_use]
    pub fn current_pronouns(&self) -> &str {
        self.pronouns.as_deref().unwrap_or("")
    }

    /// Returns the saved selection's catalog key, if the saved identifier is
    /// well-formed and present in the catalog.
    ///
    /// A saved value outside the catalog degrades to `None` silently.
    #[must_use]
    pub fn current_pronouns_key(&self) -> Option<&str> {
        pronouns::catalog_key(self.current_pronouns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pronouns_defaults_to_empty() {
        let details = PersonalDetails {
            login: Some("user@example.com".to_string()),
            pronouns: None,
        };
        assert_eq!(details.current_pronouns(), "");
        assert_eq!(details.current_pronouns_key(), None);
    }

    #[test]
    fn saved_identifier_resolves_to_catalog_key() {
        let details = PersonalDetails {
            login: Some("user@example.com".to_string()),
            pronouns: Some("__predefined_sheHerHers".to_string()),
        };
        assert_eq!(details.current_pronouns_key(), Some("sheHerHers"));
    }

    #[test]
    fn unknown_saved_identifier_degrades_to_none() {
        let details = PersonalDetails {
            login: Some("user@example.com".to_string()),
            pronouns: Some("__predefined_unknownValue".to_string()),
        };
        assert_eq!(details.current_pronouns_key(), None);
    }
}
