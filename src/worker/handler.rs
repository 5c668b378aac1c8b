//! Worker thread implementation for asynchronous store operations.
//!
//! This module implements the Zellij worker interface, keeping all profile
//! storage I/O off the main rendering loop. Trace context from incoming
//! messages is re-attached so worker spans join the originating trace.

use crate::domain::error::{Result, ZprofileError};
use crate::infrastructure::paths;
use crate::storage::{JsonProfileStore, ProfileStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state owning the profile store.
///
/// Runs on a separate thread spawned by Zellij and processes messages from
/// the main plugin thread. The store is initialized lazily on first message
/// receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct ZprofileWorker {
    /// Profile store, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn ProfileStore>>,
}

impl ZprofileWorker {
    /// Creates a worker backed by the default JSON profile store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn new() -> Result<Self> {
        let store: Box<dyn ProfileStore> = Box::new(JsonProfileStore::new(paths::profile_file())?);
        Ok(Self { store: Some(store) })
    }

    /// Creates a worker over an explicit store (used by tests).
    #[must_use]
    pub fn with_store(store: Box<dyn ProfileStore>) -> Self {
        Self { store: Some(store) }
    }

    fn get_store(&mut self) -> Result<&mut Box<dyn ProfileStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| ZprofileError::Worker("store not initialized".to_string()))
    }

    /// Standardizes error handling and logging across store operations.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadDetails` message.
    fn handle_load_details(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load details",
            self.get_store().and_then(|store| store.load_details()),
            |record| WorkerResponse::DetailsLoaded {
                details: record.into_details(),
            },
        )
    }

    /// Handles the `UpdatePronouns` message.
    ///
    /// Persists the proposed value, then answers with the fresh snapshot so
    /// the pane receives its state from the store rather than assuming the
    /// write took effect.
    fn handle_update_pronouns(&mut self, value: &str) -> WorkerResponse {
        let timestamp = chrono::Utc::now().timestamp();

        let result = self.get_store().and_then(|store| {
            store.update_pronouns(value, timestamp)?;
            store.load_details()
        });

        Self::handle_store_result("update pronouns", result, |record| {
            tracing::debug!(value = %value, "pronouns persisted");
            WorkerResponse::DetailsLoaded {
                details: record.into_details(),
            }
        })
    }

    /// Re-attaches the parent trace context carried by a message.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::LoadDetails { trace_context }
            | WorkerMessage::UpdatePronouns { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context =
            opentelemetry::Context::current().with_remote_span_context(span_context);
        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadDetails { .. } => self.handle_load_details(),
            WorkerMessage::UpdatePronouns { value, .. } => self.handle_update_pronouns(&value),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Same configuration as the main thread, so traces from both threads land
/// in the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    observability::init_tracing(&Config::default());
}

/// Tracks whether worker tracing has been initialized for this thread.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZprofileWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// Initializes tracing and the store lazily, deserializes the payload,
    /// dispatches to [`handle_message`](Self::handle_message), and posts the
    /// serialized response back.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => self.store = worker.store,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize profile store");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize profile store: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_in(dir: &tempfile::TempDir) -> ZprofileWorker {
        let store = JsonProfileStore::new(dir.path().join("profile.json")).expect("store");
        ZprofileWorker::with_store(Box::new(store))
    }

    #[test]
    fn load_details_on_a_fresh_store_yields_an_empty_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut worker = worker_in(&dir);

        let response = worker.handle_message(WorkerMessage::load_details());
        let WorkerResponse::DetailsLoaded { details } = response else {
            panic!("expected DetailsLoaded, got {response:?}");
        };
        assert_eq!(details.login, None);
        assert_eq!(details.pronouns, None);
    }

    #[test]
    fn update_flows_the_fresh_snapshot_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut worker = worker_in(&dir);

        let response = worker.handle_message(WorkerMessage::update_pronouns(
            "__predefined_theyThemTheirs".to_string(),
        ));
        let WorkerResponse::DetailsLoaded { details } = response else {
            panic!("expected DetailsLoaded, got {response:?}");
        };
        assert_eq!(
            details.pronouns.as_deref(),
            Some("__predefined_theyThemTheirs")
        );
    }

    #[test]
    fn clearing_the_preference_round_trips_as_no_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut worker = worker_in(&dir);

        worker.handle_message(WorkerMessage::update_pronouns(
            "__predefined_perPers".to_string(),
        ));
        let response = worker.handle_message(WorkerMessage::update_pronouns(String::new()));

        let WorkerResponse::DetailsLoaded { details } = response else {
            panic!("expected DetailsLoaded, got {response:?}");
        };
        assert_eq!(details.pronouns, None);
    }

    #[test]
    fn uninitialized_store_reports_a_worker_error() {
        let mut worker = ZprofileWorker::default();
        let response = worker.handle_message(WorkerMessage::load_details());
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
