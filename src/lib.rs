//! Zprofile: a Zellij plugin for editing the pronouns shown on your profile.
//!
//! The plugin renders a settings pane with a searchable catalog of pronoun
//! sets. Typing filters the catalog by localized display text, the currently
//! saved choice is marked and focused, and selecting an entry persists it to
//! a JSON personal-details store (selecting the saved entry again clears it).
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Selection
//! │  - Event handling                                   │    controller
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Async store │
//! │ - Components  │   │ - Backend API │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Localization & Infrastructure Layers       │
//! │  - Pronoun catalog (domain/pronouns)                │
//! │  - Personal details model (domain/details)          │
//! │  - Translations (localization/)                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's KDL layout configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zprofile.wasm" {
//!         locale "en"
//!         locale_file "/path/to/overrides.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin load** (`main.rs`): parse configuration, initialize tracing,
//!    create [`AppState`], subscribe to Zellij events.
//! 2. **Details load**: once permissions are granted, a `LoadDetails` message
//!    is posted to the worker, which reads the JSON store and replies with a
//!    `DetailsLoaded` snapshot.
//! 3. **Editing**: typing filters the catalog; Enter posts `UpdatePronouns`
//!    to the worker, which persists the value and flows the updated snapshot
//!    back so the pane never mutates its own copy.
//!
//! # Examples
//!
//! ```rust
//! use zprofile::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     locale: "en".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('t'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zprofile::ZprofileError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod localization;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SelectionPhase};
pub use domain::{PersonalDetails, PronounOption, Result, ZprofileError};
pub use localization::{Locale, Localizer};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zprofile.wasm" {
///     locale "es"
///     locale_file "/path/to/overrides.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Locale name for display text. Options: `en`, `es`. Default: `"en"`.
    pub locale: String,

    /// Path to a TOML file of translation overrides.
    ///
    /// Keys are phrase identifiers such as `pronouns.theyThemTheirs`; values
    /// replace the built-in text for the configured locale.
    pub locale_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            locale_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or unparseable entries fall back to defaults; an unknown
    /// locale name falls back to English at [`initialize`] time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zprofile::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("locale".to_string(), "es".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.locale, "es");
    /// assert!(config.trace_level.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            locale: config
                .get("locale")
                .cloned()
                .unwrap_or_else(|| "en".to_string()),
            locale_file: config.get("locale_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Builds the [`Localizer`] (locale name, optional override file) and returns
/// an [`AppState`] in its loading phase, ready for event processing. Locale
/// failures degrade to the built-in English phrases rather than erroring.
///
/// # Example
///
/// ```rust
/// use zprofile::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.is_loading());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zprofile plugin");

    let locale = Locale::from_name(&config.locale).unwrap_or_else(|| {
        tracing::debug!(locale = %config.locale, "unknown locale, using default");
        Locale::default()
    });

    let localizer = config.locale_file.as_ref().map_or_else(
        || Localizer::new(locale),
        |locale_file| {
            Localizer::with_overrides(locale, std::path::Path::new(locale_file)).unwrap_or_else(
                |e| {
                    tracing::debug!(locale_file = %locale_file, error = %e, "failed to load locale overrides, using built-in phrases");
                    Localizer::new(locale)
                },
            )
        },
    );

    AppState::new(localizer)
}
