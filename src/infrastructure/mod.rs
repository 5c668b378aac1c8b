//! Infrastructure layer for filesystem interactions in the plugin sandbox.

pub mod paths;

pub use paths::{get_data_dir, profile_file};
