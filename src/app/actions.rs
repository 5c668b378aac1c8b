//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or store updates. Actions
//! bridge pure state transformations and effectful operations: posting store
//! mutations to the worker and navigating away from the pane.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by the event handler, executed by the shim in `main.rs`. The
/// handler itself never performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the pane, returning to wherever the user came from.
    ///
    /// Emitted when the user presses Escape. Navigation mechanics belong to
    /// the shell; the pane only requests it.
    NavigateBack,

    /// Posts a message to the background worker thread.
    ///
    /// Carries store operations (initial load, pronoun updates) so the main
    /// event loop never blocks on storage I/O.
    PostToWorker(WorkerMessage),
}
