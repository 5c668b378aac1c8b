//! Selection controller phases.
//!
//! This module defines the state machine enum that tracks where the pane is
//! in its lifecycle: waiting for profile data, showing the prefilled saved
//! selection, or filtering on user-typed text.

/// Lifecycle phase of the selection controller.
///
/// Transitions:
///
/// - `Uninitialized` → `Ready` when profile data arrives with a resolved
///   login (the search box is prefilled with the saved selection's display
///   text, or left empty when the saved identifier is not in the catalog).
/// - any → `Searching` on user text input; typing always overrides the
///   prefill and is never clobbered by re-delivery of the same login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// App-level data is still loading and no login has resolved yet.
    ///
    /// The pane renders a loading indicator and no filter output.
    #[default]
    Uninitialized,

    /// Profile data is available; the query reflects the saved selection's
    /// display text.
    Ready,

    /// The user has typed a query. Independent of the saved selection.
    Searching,
}
