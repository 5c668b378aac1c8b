//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state, following the MVVM
//! pattern the rest of the UI layer consumes. View models carry only
//! display-ready data: pre-computed highlight ranges, resolved localized
//! strings, and the visible row window.

/// Complete view model for one render pass of the pronouns pane.
///
/// Computed by `AppState::compute_viewmodel` and consumed by the renderer.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Whether to render the full-screen loading indicator instead of the
    /// pane (app data still loading, no login resolved).
    pub loading: bool,

    /// Localized loading label, only meaningful while `loading` is set.
    pub loading_text: String,

    /// Localized pane title for the header bar.
    pub title: String,

    /// Localized description line shown under the header.
    pub description: String,

    /// Search input box contents.
    pub search: SearchBoxInfo,

    /// "No results" message, empty string when none applies.
    pub header_message: String,

    /// Visible option rows (already windowed around the cursor).
    pub rows: Vec<OptionRow>,

    /// Cursor position relative to `rows`.
    pub selected_index: usize,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Display information for a single pronoun option row.
#[derive(Debug, Clone)]
pub struct OptionRow {
    /// Localized display text.
    pub text: String,

    /// Bare catalog key (row key).
    pub key: String,

    /// Whether this row is the saved selection (renders a marker).
    pub is_current: bool,

    /// Whether the cursor is on this row.
    pub is_focused: bool,

    /// Character ranges of substring matches to highlight,
    /// `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search input box display state.
#[derive(Debug, Clone, Default)]
pub struct SearchBoxInfo {
    /// Localized input label.
    pub label: String,

    /// Localized placeholder shown while the value is empty.
    pub placeholder: String,

    /// Current search text.
    pub value: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
