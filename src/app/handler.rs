//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! store updates, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//!
//! 1. Events arrive from the plugin runtime or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for execution
//!
//! The selection path is deliberately one-way: picking a row emits exactly
//! one store update and mutates nothing locally. The store is the source of
//! truth and flows a fresh snapshot back as a [`WorkerResponse`].

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::PersonalDetails;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or externally-delivered profile updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Selects the row under the cursor, proposing a new saved value.
    SelectOption,
    /// Requests navigation back out of the pane.
    Back,

    /// Delivers an updated profile snapshot with the app-loading flag.
    ///
    /// Emitted by the shim from worker responses (and synthesized at tests'
    /// convenience). Triggers the prefill reconciliation in [`AppState`].
    ProfileUpdate {
        /// The new personal-details snapshot.
        details: PersonalDetails,
        /// Whether app-level data is still loading.
        is_loading_app: bool,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: `should_render` signals the plugin
/// runtime to redraw, and the actions are executed in order by the shim.
///
/// # Errors
///
/// Reserved for state mutation failures; the current transitions are
/// infallible but the signature matches the runtime's expectations.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            state.push_search_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            state.pop_search_char();
            Ok((true, vec![]))
        }
        Event::SelectOption => {
            let Some(option) = state.focused_option() else {
                tracing::debug!("no option under cursor");
                return Ok((false, vec![]));
            };

            // Selecting the already-saved option clears the preference;
            // anything else proposes its fully-qualified identifier.
            let proposed = if state.details.current_pronouns_key() == Some(option.key.as_str()) {
                String::new()
            } else {
                option.value.clone()
            };

            tracing::debug!(
                option_key = %option.key,
                proposed = %proposed,
                "option selected, proposing update"
            );

            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::update_pronouns(proposed))],
            ))
        }
        Event::Back => {
            tracing::debug!("navigating back");
            Ok((false, vec![Action::NavigateBack]))
        }
        Event::ProfileUpdate {
            details,
            is_loading_app,
        } => {
            state.apply_profile_update(details.clone(), *is_loading_app);
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::DetailsLoaded { details } => {
                // the first snapshot ends the app-loading state
                state.apply_profile_update(details.clone(), false);
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(message = %message, "worker error");
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pronouns::fully_qualified;
    use crate::localization::Localizer;

    fn ready_state(saved: Option<&str>) -> AppState {
        let mut state = AppState::new(Localizer::default());
        let details = PersonalDetails {
            login: Some("user@example.com".to_string()),
            pronouns: saved.map(ToString::to_string),
        };
        state.apply_profile_update(details, false);
        state
    }

    fn focus_key(state: &mut AppState, key: &str) {
        let position = state
            .filtered_options
            .iter()
            .position(|o| o.key == key)
            .expect("key visible in filtered options");
        state.selected_index = position;
    }

    #[test]
    fn selecting_a_new_option_proposes_its_fully_qualified_identifier() {
        let mut state = ready_state(None);
        state.set_search_query("they".to_string());
        focus_key(&mut state, "theyThemTheirs");

        let (should_render, actions) =
            handle_event(&mut state, &Event::SelectOption).expect("handle");
        assert!(!should_render);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::update_pronouns(
                fully_qualified("theyThemTheirs")
            ))]
        );
    }

    #[test]
    fn selecting_the_saved_option_proposes_clearing() {
        let mut state = ready_state(Some("__predefined_sheHerHers"));
        state.set_search_query("she".to_string());
        focus_key(&mut state, "sheHerHers");

        let (_, actions) = handle_event(&mut state, &Event::SelectOption).expect("handle");
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::update_pronouns(
                String::new()
            ))]
        );
    }

    #[test]
    fn selection_emits_exactly_one_update_and_no_local_mutation() {
        let mut state = ready_state(None);
        state.set_search_query("xe".to_string());
        focus_key(&mut state, "xeXemXyr");

        let query_before = state.search_query.clone();
        let (_, actions) = handle_event(&mut state, &Event::SelectOption).expect("handle");
        assert_eq!(actions.len(), 1);
        assert_eq!(state.search_query, query_before);
        assert_eq!(state.details.current_pronouns(), "");
    }

    #[test]
    fn selecting_with_no_rows_is_a_no_op() {
        let mut state = ready_state(None);
        assert!(state.filtered_options.is_empty());

        let (should_render, actions) =
            handle_event(&mut state, &Event::SelectOption).expect("handle");
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn back_requests_navigation() {
        let mut state = ready_state(None);
        let (_, actions) = handle_event(&mut state, &Event::Back).expect("handle");
        assert_eq!(actions, vec![Action::NavigateBack]);
    }

    #[test]
    fn details_loaded_response_ends_app_loading() {
        let mut state = AppState::new(Localizer::default());
        assert!(state.is_loading());

        let response = WorkerResponse::DetailsLoaded {
            details: PersonalDetails {
                login: Some("user@example.com".to_string()),
                pronouns: Some(fully_qualified("perPers")),
            },
        };
        let (should_render, actions) =
            handle_event(&mut state, &Event::WorkerResponse(response)).expect("handle");
        assert!(should_render);
        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.search_query, "Per / Pers");
    }

    #[test]
    fn worker_errors_are_swallowed_without_state_changes() {
        let mut state = ready_state(Some("__predefined_perPers"));
        let query_before = state.search_query.clone();

        let response = WorkerResponse::Error {
            message: "disk full".to_string(),
        };
        let (should_render, actions) =
            handle_event(&mut state, &Event::WorkerResponse(response)).expect("handle");
        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.search_query, query_before);
    }

    #[test]
    fn typing_flows_through_to_the_filter() {
        let mut state = ready_state(None);
        for c in "fae".chars() {
            handle_event(&mut state, &Event::Char(c)).expect("handle");
        }
        assert_eq!(state.filtered_options.len(), 1);
        assert_eq!(state.filtered_options[0].key, "faeFaer");

        handle_event(&mut state, &Event::Backspace).expect("handle");
        assert_eq!(state.search_query, "fa");
    }
}
