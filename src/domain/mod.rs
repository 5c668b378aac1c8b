//! Domain layer for the zprofile plugin.
//!
//! This module contains the core domain types for the pronouns pane,
//! independent of Zellij-specific APIs or infrastructure concerns: the fixed
//! option catalog, the personal-details snapshot, and the error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`pronouns`]: Option catalog and derived [`PronounOption`] rows
//! - [`details`]: Personal-details snapshot from the profile store

pub mod details;
pub mod error;
pub mod pronouns;

pub use details::PersonalDetails;
pub use error::{Result, ZprofileError};
pub use pronouns::PronounOption;
