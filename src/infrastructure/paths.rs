//! Storage paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox; `/host`
//! points at the cwd of the last focused terminal, or where Zellij was
//! started. When that is the user's home directory the data dir resolves to
//! `~/.local/share/zellij/zprofile`.

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/zprofile`.
///
/// Both the profile store and the trace file live here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zprofile")
}

/// Returns the path of the JSON personal-details store.
#[must_use]
pub fn profile_file() -> PathBuf {
    get_data_dir().join("profile.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_file_lives_in_data_dir() {
        let file = profile_file();
        assert!(file.starts_with(get_data_dir()));
        assert_eq!(file.file_name().unwrap(), "profile.json");
    }
}
