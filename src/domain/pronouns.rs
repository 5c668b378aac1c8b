//! The pronoun option catalog.
//!
//! This module defines the fixed, ordered set of pronoun catalog keys known at
//! build time, the prefix used to form fully-qualified identifiers for
//! storage, and the ephemeral [`PronounOption`] rows derived from the catalog
//! during filtering.
//!
//! # Identifiers
//!
//! Two forms of identifier exist:
//!
//! - **Catalog key**: the bare key (e.g. `heHimHis`), used for list rendering,
//!   localization lookup, and focus targeting.
//! - **Fully-qualified identifier**: the prefix plus the key (e.g.
//!   `__predefined_heHimHis`), used for storage and comparison against the
//!   saved selection.

/// Prefix prepended to a catalog key to form the stored identifier.
pub const PRONOUNS_PREFIX: &str = "__predefined_";

/// The fixed, ordered pronoun catalog.
///
/// Keys are unique and stable; the order here breaks ties when options sort
/// equal by localized display text.
pub const CATALOG: &[&str] = &[
    "coCos",
    "eEyEmEir",
    "faeFaer",
    "heHimHis",
    "heHimHisTheyThemTheirs",
    "merMers",
    "neNirNirs",
    "neeNerNers",
    "perPers",
    "sheHerHers",
    "sheHerHersTheyThemTheirs",
    "theyThemTheirs",
    "thonThons",
    "veVerVis",
    "viVir",
    "xeXemXyr",
    "zeHirHirs",
    "zeZieZirHir",
    "callMeByMyName",
];

/// Enumerates the catalog keys in their fixed order.
pub fn enumerate() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().copied()
}

/// Returns `true` if `key` is a bare catalog key.
#[must_use]
pub fn contains(key: &str) -> bool {
    CATALOG.contains(&key)
}

/// Builds the fully-qualified identifier for a catalog key.
///
/// # Examples
///
/// ```
/// use zprofile::domain::pronouns;
///
/// assert_eq!(pronouns::fully_qualified("heHimHis"), "__predefined_heHimHis");
/// ```
#[must_use]
pub fn fully_qualified(key: &str) -> String {
    format!("{PRONOUNS_PREFIX}{key}")
}

/// Extracts the catalog key from a fully-qualified identifier.
///
/// Returns `None` if the identifier does not carry the expected prefix or the
/// remainder is not a known catalog key. A saved value that fails this lookup
/// is treated as "no selection", never as an error.
///
/// # Examples
///
/// ```
/// use zprofile::domain::pronouns;
///
/// assert_eq!(pronouns::catalog_key("__predefined_theyThemTheirs"), Some("theyThemTheirs"));
/// assert_eq!(pronouns::catalog_key("theyThemTheirs"), None);
/// assert_eq!(pronouns::catalog_key("__predefined_unknownValue"), None);
/// ```
#[must_use]
pub fn catalog_key(value: &str) -> Option<&str> {
    let key = value.strip_prefix(PRONOUNS_PREFIX)?;
    contains(key).then_some(key)
}

/// A single selectable pronoun row, derived from the catalog at filter time.
///
/// Ephemeral: recomputed whenever the query or the saved selection changes,
/// never persisted. `text` is the localized form of the key in the active
/// locale and must not be cached across locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounOption {
    /// Bare catalog key (row key / focus target).
    pub key: String,

    /// Fully-qualified identifier proposed to storage on selection.
    pub value: String,

    /// Localized display text used for sorting and filtering.
    pub text: String,

    /// Whether this option's fully-qualified identifier equals the saved
    /// selection. True for at most one option per filter pass.
    pub is_selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let unique: HashSet<&str> = CATALOG.iter().copied().collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn fully_qualified_round_trips_through_catalog_key() {
        for key in enumerate() {
            let value = fully_qualified(key);
            assert_eq!(catalog_key(&value), Some(key));
        }
    }

    #[test]
    fn catalog_key_rejects_unprefixed_and_unknown_values() {
        assert_eq!(catalog_key("heHimHis"), None);
        assert_eq!(catalog_key("__predefined_notARealKey"), None);
        assert_eq!(catalog_key(""), None);
    }
}
