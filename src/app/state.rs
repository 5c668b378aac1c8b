//! Application state and the search/filter core.
//!
//! This module defines [`AppState`], the central state container for the
//! pronouns pane, along with [`compute_options`], the pure filter function
//! that turns the option catalog plus the current query into the sorted,
//! annotated rows the UI renders.
//!
//! # State Components
//!
//! - **Details**: the latest personal-details snapshot from the store
//! - **Search query**: user-typed (or prefilled) filter text
//! - **Filtered options**: derived rows, recomputed by `apply_search_filter`
//! - **Phase**: the [`SelectionPhase`] lifecycle state
//! - **Focus**: cursor position within the filtered rows
//!
//! # Reconciliation
//!
//! When profile data arrives with a login for the first time, the search box
//! is prefilled with the localized display text of the saved selection (or
//! left empty when the saved identifier is unknown). The prefill is keyed on
//! the login value alone so that unrelated profile updates, including the
//! snapshot that flows back after a pronoun update, never clobber text the
//! user has typed.

use super::modes::SelectionPhase;
use crate::domain::{pronouns, PersonalDetails, PronounOption};
use crate::localization::Localizer;
use crate::ui::viewmodel::{FooterInfo, OptionRow, SearchBoxInfo, UIViewModel};

/// Computes the filtered, sorted pronoun options for a query.
///
/// This is the filter core:
///
/// 1. Build one [`PronounOption`] per catalog key, with localized display
///    text and `is_selected` set when the fully-qualified identifier equals
///    `current_identifier`.
/// 2. Stable-sort by display text, case-insensitively (ties keep catalog
///    order).
/// 3. An empty trimmed query yields an empty list: the pane deliberately
///    shows no rows until the user types.
/// 4. Otherwise keep options whose display text contains the trimmed query
///    as a case-insensitive substring, preserving sorted order.
///
/// Empty output is a valid "no results" state, not an error.
///
/// # Examples
///
/// ```
/// use zprofile::app::state::compute_options;
/// use zprofile::localization::Localizer;
///
/// let localizer = Localizer::default();
/// assert!(compute_options("", "", &localizer).is_empty());
///
/// let matches = compute_options("fae", "", &localizer);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].key, "faeFaer");
/// ```
#[must_use]
pub fn compute_options(
    query: &str,
    current_identifier: &str,
    localizer: &Localizer,
) -> Vec<PronounOption> {
    let mut options: Vec<PronounOption> = pronouns::enumerate()
        .map(|key| {
            let value = pronouns::fully_qualified(key);
            PronounOption {
                text: localizer.pronoun_text(key),
                is_selected: !current_identifier.is_empty() && value == current_identifier,
                key: key.to_string(),
                value,
            }
        })
        .collect();

    // sort_by is stable, so equal display texts keep catalog order
    options.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    options.retain(|option| !match_ranges(&option.text, trimmed).is_empty());
    options
}

/// Finds every case-insensitive occurrence of `needle` in `text`.
///
/// Returns `(start, end)` character index ranges (exclusive end) suitable for
/// highlight rendering. Matching is per-character lowercase comparison, the
/// same predicate the filter uses, so highlighted ranges always exist for a
/// row that passed the filter.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().map(lowercase_char).collect();
    let needle_chars: Vec<char> = needle.chars().map(lowercase_char).collect();

    if needle_chars.is_empty() || needle_chars.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle_chars.len() <= haystack.len() {
        if haystack[start..start + needle_chars.len()] == needle_chars[..] {
            ranges.push((start, start + needle_chars.len()));
            start += needle_chars.len();
        } else {
            start += 1;
        }
    }
    ranges
}

fn lowercase_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Central application state container.
///
/// Holds the profile snapshot, search text, derived rows, and cursor. Mutated
/// by the event handler in response to user input and store updates; view
/// models are computed on demand from state snapshots.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Latest personal-details snapshot delivered by the store.
    pub details: PersonalDetails,

    /// Whether app-level data is still loading.
    ///
    /// Owned by the plugin shell; starts `true` and flips `false` with the
    /// first store snapshot. While loading with no resolved login, the pane
    /// renders a loading indicator only.
    pub is_loading_app: bool,

    /// Lifecycle phase of the selection controller.
    pub phase: SelectionPhase,

    /// Current search text (user-typed, or prefilled from the saved
    /// selection when profile data resolves).
    pub search_query: String,

    /// Options matching the current query, sorted by display text.
    ///
    /// Recomputed by [`apply_search_filter`](Self::apply_search_filter).
    pub filtered_options: Vec<PronounOption>,

    /// Zero-based cursor position within `filtered_options`.
    pub selected_index: usize,

    /// Active localizer for display text resolution.
    pub localizer: Localizer,

    /// Login value the search prefill last ran for.
    ///
    /// Guards the `Uninitialized` → `Ready` transition: re-delivery of the
    /// same login must not reset user-typed search text.
    resolved_login: Option<String>,
}

impl AppState {
    /// Creates a new application state with the given localizer.
    ///
    /// Starts in [`SelectionPhase::Uninitialized`] with `is_loading_app`
    /// set, an empty query, and no rows.
    #[must_use]
    pub fn new(localizer: Localizer) -> Self {
        Self {
            is_loading_app: true,
            localizer,
            ..Self::default()
        }
    }

    /// Applies an updated profile snapshot.
    ///
    /// Always adopts the new details and re-filters (the saved selection may
    /// have changed, which affects row annotations). The search prefill runs
    /// only when a login is present and differs from the last resolved login:
    /// the query becomes the localized display text of the saved selection,
    /// or the empty string when the saved identifier has no catalog match.
    pub fn apply_profile_update(&mut self, details: PersonalDetails, is_loading_app: bool) {
        let _span = tracing::debug_span!(
            "apply_profile_update",
            has_login = details.login.is_some(),
            is_loading_app
        )
        .entered();

        self.is_loading_app = is_loading_app;
        self.details = details;

        if let Some(login) = self.details.login.clone() {
            if self.resolved_login.as_deref() == Some(login.as_str()) {
                tracing::debug!("login unchanged, keeping search text");
            } else {
                let prefill = self
                    .details
                    .current_pronouns_key()
                    .map(|key| self.localizer.pronoun_text(key))
                    .unwrap_or_default();

                tracing::debug!(prefill = %prefill, "login resolved, prefilling search");
                self.search_query = prefill;
                self.resolved_login = Some(login);
                self.phase = SelectionPhase::Ready;
            }
        }

        self.apply_search_filter();
    }

    /// Replaces the search text with user input.
    ///
    /// Enters (or remains in) [`SelectionPhase::Searching`]; typing always
    /// overrides the prefill.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.phase = SelectionPhase::Searching;
        self.apply_search_filter();
    }

    /// Appends a typed character to the search text.
    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.phase = SelectionPhase::Searching;
        tracing::trace!(query = %self.search_query, "search query updated");
        self.apply_search_filter();
    }

    /// Removes the last character from the search text.
    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.phase = SelectionPhase::Searching;
        self.apply_search_filter();
    }

    /// Recomputes `filtered_options` from the current query and selection.
    ///
    /// Focus handling: when rows first appear the cursor lands on the saved
    /// selection if it is visible (the initially-focused row), otherwise on
    /// the first row. While rows remain visible the cursor is only clamped,
    /// so navigation during typing is not reset on every keystroke.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            query_len = self.search_query.len()
        )
        .entered();

        let had_rows = !self.filtered_options.is_empty();
        self.filtered_options = compute_options(
            &self.search_query,
            self.details.current_pronouns(),
            &self.localizer,
        );

        if self.filtered_options.is_empty() {
            self.selected_index = 0;
        } else if had_rows {
            self.selected_index = self.selected_index.min(self.filtered_options.len() - 1);
        } else {
            self.selected_index = self
                .filtered_options
                .iter()
                .position(|option| option.is_selected)
                .unwrap_or(0);
        }

        tracing::debug!(
            filtered_count = self.filtered_options.len(),
            "search filter applied"
        );
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_options.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_options.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_options.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_options.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the row under the cursor, if any.
    #[must_use]
    pub fn focused_option(&self) -> Option<&PronounOption> {
        self.filtered_options.get(self.selected_index)
    }

    /// Whether the pane should show the full-screen loading indicator.
    ///
    /// True while app data is loading and no login has resolved; no filter
    /// output is shown in that state.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading_app && self.details.login.is_none()
    }

    /// The "no results" header message, or `""` when none applies.
    #[must_use]
    pub fn header_message(&self) -> String {
        if !self.search_query.trim().is_empty() && self.filtered_options.is_empty() {
            self.localizer.translate("common.noResultsFound")
        } else {
            String::new()
        }
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// Handles the loading state, windowing of visible rows around the
    /// cursor, and substring match highlighting.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let title = self.localizer.translate("pronounsPage.pronouns");

        if self.is_loading() {
            return UIViewModel {
                loading: true,
                loading_text: self.localizer.translate("common.loading"),
                title,
                description: String::new(),
                search: SearchBoxInfo::default(),
                header_message: String::new(),
                rows: Vec::new(),
                selected_index: 0,
                footer: FooterInfo {
                    keybindings: String::new(),
                },
            };
        }

        let available_rows = self.visible_row_budget(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_options.len());
        let visible_count = visible_end - visible_start;
        if visible_count < available_rows && self.filtered_options.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let trimmed = self.search_query.trim();
        let rows: Vec<OptionRow> = self.filtered_options[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, option)| OptionRow {
                text: option.text.clone(),
                key: option.key.clone(),
                is_current: option.is_selected,
                is_focused: visible_start + relative_idx == self.selected_index,
                highlight_ranges: match_ranges(&option.text, trimmed),
            })
            .collect();

        UIViewModel {
            loading: false,
            loading_text: String::new(),
            title,
            description: self.localizer.translate("pronounsPage.isShownOnProfile"),
            search: SearchBoxInfo {
                label: self.localizer.translate("pronounsPage.pronouns"),
                placeholder: self.localizer.translate("pronounsPage.placeholderText"),
                value: self.search_query.clone(),
            },
            header_message: self.header_message(),
            rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            footer: FooterInfo {
                keybindings:
                    "Type to filter  ↑/↓ or Ctrl+p/n: navigate  Enter: select  Esc: back"
                        .to_string(),
            },
        }
    }

    /// Rows available for the option list after subtracting UI chrome.
    ///
    /// Chrome: blank line, header, border, description, search box (3),
    /// border, footer.
    const fn visible_row_budget(&self, total_rows: usize) -> usize {
        total_rows.saturating_sub(9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pronouns::fully_qualified;

    fn localizer() -> Localizer {
        Localizer::default()
    }

    fn details(login: Option<&str>, pronouns_value: Option<&str>) -> PersonalDetails {
        PersonalDetails {
            login: login.map(ToString::to_string),
            pronouns: pronouns_value.map(ToString::to_string),
        }
    }

    #[test]
    fn empty_query_yields_no_rows_regardless_of_selection() {
        assert!(compute_options("", "", &localizer()).is_empty());
        assert!(compute_options("   ", "", &localizer()).is_empty());
        assert!(compute_options("", &fully_qualified("heHimHis"), &localizer()).is_empty());
    }

    #[test]
    fn results_contain_query_as_case_insensitive_substring() {
        let results = compute_options("HE", "", &localizer());
        assert!(!results.is_empty());
        for option in &results {
            assert!(
                option.text.to_lowercase().contains("he"),
                "{} does not contain 'he'",
                option.text
            );
        }
        let keys: Vec<&str> = results.iter().map(|o| o.key.as_str()).collect();
        assert!(keys.contains(&"heHimHis"));
        assert!(keys.contains(&"sheHerHers"));
    }

    #[test]
    fn results_are_sorted_case_insensitively_by_display_text() {
        let results = compute_options("e", "", &localizer());
        let mut sorted = results.clone();
        sorted.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));
        assert_eq!(results, sorted);
    }

    #[test]
    fn at_most_one_result_is_marked_selected() {
        let current = fully_qualified("sheHerHers");
        let results = compute_options("e", &current, &localizer());
        let selected: Vec<&PronounOption> =
            results.iter().filter(|o| o.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, current);

        let none_selected = compute_options("e", "", &localizer());
        assert!(none_selected.iter().all(|o| !o.is_selected));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let padded = compute_options("  fae  ", "", &localizer());
        assert_eq!(padded.len(), 1);
        assert_eq!(padded[0].key, "faeFaer");
    }

    #[test]
    fn no_match_is_a_valid_empty_result() {
        assert!(compute_options("zzzz", "", &localizer()).is_empty());
    }

    #[test]
    fn match_ranges_finds_all_case_insensitive_occurrences() {
        assert_eq!(match_ranges("He / Him / His", "hi"), vec![(5, 7), (11, 13)]);
        assert_eq!(match_ranges("They / Them / Theirs", "THE"), vec![(0, 3), (7, 10), (14, 17)]);
        assert!(match_ranges("Per / Pers", "xyz").is_empty());
        assert!(match_ranges("Per / Pers", "").is_empty());
    }

    #[test]
    fn prefill_uses_saved_selections_display_text() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(
            details(Some("user@example.com"), Some("__predefined_sheHerHers")),
            false,
        );
        assert_eq!(state.search_query, "She / Her / Hers");
        assert_eq!(state.phase, SelectionPhase::Ready);
    }

    #[test]
    fn unknown_saved_identifier_prefills_empty_query() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(
            details(Some("user@example.com"), Some("__predefined_unknownValue")),
            false,
        );
        assert_eq!(state.search_query, "");
        assert_eq!(state.phase, SelectionPhase::Ready);
        assert!(state.filtered_options.is_empty());
    }

    #[test]
    fn duplicate_login_delivery_keeps_user_typed_text() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(details(Some("user@example.com"), None), false);

        state.set_search_query("xe".to_string());
        assert_eq!(state.phase, SelectionPhase::Searching);

        // the store flowing back an unrelated update must not clobber typing
        state.apply_profile_update(
            details(Some("user@example.com"), Some("__predefined_xeXemXyr")),
            false,
        );
        assert_eq!(state.search_query, "xe");
        assert_eq!(state.phase, SelectionPhase::Searching);
    }

    #[test]
    fn login_change_reruns_the_prefill() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(
            details(Some("first@example.com"), Some("__predefined_perPers")),
            false,
        );
        assert_eq!(state.search_query, "Per / Pers");

        state.set_search_query("ve".to_string());
        state.apply_profile_update(
            details(Some("second@example.com"), Some("__predefined_viVir")),
            false,
        );
        assert_eq!(state.search_query, "Vi / Vir");
        assert_eq!(state.phase, SelectionPhase::Ready);
    }

    #[test]
    fn loading_gate_holds_until_login_resolves() {
        let mut state = AppState::new(localizer());
        assert!(state.is_loading());
        assert_eq!(state.phase, SelectionPhase::Uninitialized);

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.loading);
        assert!(vm.rows.is_empty());

        state.apply_profile_update(details(Some("user@example.com"), None), false);
        assert!(!state.is_loading());
        assert!(!state.compute_viewmodel(24, 80).loading);
    }

    #[test]
    fn rows_first_appearing_focus_the_saved_selection() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(
            details(Some("user@example.com"), Some("__predefined_sheHerHers")),
            false,
        );

        // prefill query "She / Her / Hers" matches more than one option
        assert!(!state.filtered_options.is_empty());
        let focused = state.focused_option().expect("focused row");
        assert!(focused.is_selected);
    }

    #[test]
    fn cursor_wraps_and_survives_query_narrowing() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(details(Some("user@example.com"), None), false);
        state.set_search_query("e".to_string());
        let count = state.filtered_options.len();
        assert!(count > 2);

        state.move_selection_up();
        assert_eq!(state.selected_index, count - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.move_selection_down();
        state.push_search_char('r');
        assert!(state.selected_index < state.filtered_options.len());
    }

    #[test]
    fn header_message_appears_only_for_non_empty_query_with_no_rows() {
        let mut state = AppState::new(localizer());
        state.apply_profile_update(details(Some("user@example.com"), None), false);

        assert_eq!(state.header_message(), "");
        state.set_search_query("zzzz".to_string());
        assert_eq!(state.header_message(), "No results found");
        state.set_search_query("he".to_string());
        assert_eq!(state.header_message(), "");
    }
}
