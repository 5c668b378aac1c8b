//! Profile store abstraction.
//!
//! This module defines the [`ProfileStore`] trait that abstracts over
//! personal-details persistence backends. The trait is minimal and mirrors
//! the two operations the worker actually needs: read the current snapshot
//! and write a new pronoun value. Failure handling (retries, rollback) is
//! entirely the store's concern; callers fire and forget.

use crate::domain::error::Result;
use crate::storage::models::PersonalDetailsRecord;

/// Abstraction over personal-details persistence backends.
///
/// # Implementations
///
/// - [`JsonProfileStore`](crate::storage::JsonProfileStore): JSON file with
///   atomic writes (default)
pub trait ProfileStore: Send {
    /// Loads the current personal-details record.
    ///
    /// A store that has never been written returns the default record, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn load_details(&self) -> Result<PersonalDetailsRecord>;

    /// Persists a new pronoun value and stamps the mutation time.
    ///
    /// `value` is either the empty string (clear the preference) or a
    /// fully-qualified pronoun identifier. The store does not validate the
    /// value against the catalog; an unknown identifier degrades gracefully
    /// on the read side.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_pronouns(&mut self, value: &str, timestamp: i64) -> Result<()>;
}
