//! Storage record models for the persistence layer.
//!
//! These types are the raw on-disk representation of the profile, kept
//! separate from the domain [`PersonalDetails`](crate::domain::PersonalDetails)
//! snapshot so storage concerns (timestamps, versioning) never leak into
//! business logic.

use crate::domain::PersonalDetails;
use serde::{Deserialize, Serialize};

/// The persisted personal-details record.
///
/// Unlike the domain snapshot, the record carries an `updated_at` timestamp
/// maintained by the store on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetailsRecord {
    /// Login of the current user.
    #[serde(default)]
    pub login: Option<String>,

    /// Saved pronoun preference as a fully-qualified identifier. An empty
    /// or absent value means no selection.
    #[serde(default)]
    pub pronouns: Option<String>,

    /// Unix timestamp of the last mutation, `None` if never written.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl PersonalDetailsRecord {
    /// Converts the record into the domain snapshot handed to the pane.
    ///
    /// An empty stored pronouns string is normalized to `None` so "cleared"
    /// and "never set" read identically.
    #[must_use]
    pub fn into_details(self) -> PersonalDetails {
        PersonalDetails {
            login: self.login,
            pronouns: self.pronouns.filter(|value| !value.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stored_pronouns_normalizes_to_none() {
        let record = PersonalDetailsRecord {
            login: Some("user@example.com".to_string()),
            pronouns: Some(String::new()),
            updated_at: Some(1_700_000_000),
        };
        assert_eq!(record.into_details().pronouns, None);
    }

    #[test]
    fn stored_value_survives_conversion() {
        let record = PersonalDetailsRecord {
            login: None,
            pronouns: Some("__predefined_heHimHis".to_string()),
            updated_at: None,
        };
        let details = record.into_details();
        assert_eq!(details.pronouns.as_deref(), Some("__predefined_heHimHis"));
    }
}
