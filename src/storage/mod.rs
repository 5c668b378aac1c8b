//! Storage layer for the persisted personal-details record.
//!
//! Provides the store abstraction the worker writes pronoun updates through
//! and reads profile snapshots from. JSON file storage is the only backend.
//!
//! # Modules
//!
//! - `backend`: [`ProfileStore`] trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::ProfileStore;
pub use json::JsonProfileStore;
pub use models::PersonalDetailsRecord;
