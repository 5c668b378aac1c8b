//! JSON file-based profile store.
//!
//! A simple, human-readable storage implementation using JSON serialization
//! with atomic file writes (write-to-temp + rename) to prevent corruption on
//! crashes. The whole record fits in one small object, so the entire file is
//! read once and rewritten on mutation.

use crate::domain::error::{Result, ZprofileError};
use crate::storage::backend::ProfileStore;
use crate::storage::models::PersonalDetailsRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// Top-level structure serialized to disk; the version field exists for
/// future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Storage format version.
    version: u32,

    /// The single personal-details record.
    #[serde(default)]
    details: PersonalDetailsRecord,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            details: PersonalDetailsRecord::default(),
        }
    }
}

/// JSON file profile store.
///
/// Keeps the record in memory and persists it on every mutation.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; designed to live on the single worker thread,
/// matching the plugin architecture.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "details": {
///     "login": "user@example.com",
///     "pronouns": "__predefined_theyThemTheirs",
///     "updated_at": 1700000000
///   }
/// }
/// ```
pub struct JsonProfileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data, loaded on creation.
    data: StorageData,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonProfileStore {
    /// Creates or opens a JSON profile store.
    ///
    /// If the file exists its contents are loaded; otherwise an empty record
    /// is used. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON profile store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no profile file yet, starting empty");
            StorageData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ZprofileError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded profile data");
        Ok(data)
    }

    /// Saves storage data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target
    /// path, so the file is never left half-written even if the process
    /// crashes mid-save.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving profile data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ZprofileError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        Ok(())
    }
}

impl ProfileStore for JsonProfileStore {
    fn load_details(&self) -> Result<PersonalDetailsRecord> {
        let _span = tracing::debug_span!("json_load_details").entered();

        let record = self.data.details.clone();
        tracing::debug!(
            has_login = record.login.is_some(),
            has_pronouns = record.pronouns.is_some(),
            "retrieved personal details"
        );
        Ok(record)
    }

    fn update_pronouns(&mut self, value: &str, timestamp: i64) -> Result<()> {
        let _span = tracing::debug_span!(
            "json_update_pronouns",
            value = %value,
            timestamp
        )
        .entered();

        self.data.details.pronouns = Some(value.to_string());
        self.data.details.updated_at = Some(timestamp);

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("pronouns updated");
        Ok(())
    }
}

impl Drop for JsonProfileStore {
    /// Flushes unsaved data on drop as a last resort.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonProfileStore {
        JsonProfileStore::new(dir.path().join("profile.json")).expect("create store")
    }

    #[test]
    fn fresh_store_loads_an_empty_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);

        let record = store.load_details().expect("load");
        assert_eq!(record, PersonalDetailsRecord::default());
    }

    #[test]
    fn updates_persist_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("profile.json");

        {
            let mut store = JsonProfileStore::new(path.clone()).expect("create store");
            store
                .update_pronouns("__predefined_theyThemTheirs", 1_700_000_000)
                .expect("update");
        }

        let reopened = JsonProfileStore::new(path).expect("reopen store");
        let record = reopened.load_details().expect("load");
        assert_eq!(record.pronouns.as_deref(), Some("__predefined_theyThemTheirs"));
        assert_eq!(record.updated_at, Some(1_700_000_000));
    }

    #[test]
    fn clearing_writes_an_empty_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);

        store
            .update_pronouns("__predefined_perPers", 1_700_000_000)
            .expect("set");
        store.update_pronouns("", 1_700_000_100).expect("clear");

        let record = store.load_details().expect("load");
        assert_eq!(record.pronouns.as_deref(), Some(""));
        assert_eq!(record.into_details().pronouns, None);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "not json at all").expect("write garbage");

        assert!(JsonProfileStore::new(path).is_err());
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("deeper").join("profile.json");

        let mut store = JsonProfileStore::new(path).expect("create store");
        store.update_pronouns("__predefined_viVir", 1).expect("update");
    }
}
