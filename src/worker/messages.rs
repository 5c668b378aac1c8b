//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request/response protocol between the main plugin
//! thread and the background worker that owns the profile store, along with
//! distributed tracing context propagation across the thread boundary.

use crate::domain::PersonalDetails;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so spans
/// created in the worker link back to their parents on the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();
        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates builder methods for [`WorkerMessage`] variants that attach the
/// current trace context automatically.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_details(LoadDetails {}),
    update_pronouns(UpdatePronouns { value: String }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant is one store operation performed asynchronously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the current personal-details snapshot from the store.
    LoadDetails {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a new pronoun preference.
    ///
    /// `value` is either the empty string (clear) or a fully-qualified
    /// pronoun identifier. Fire-and-forget from the pane's perspective; the
    /// worker answers with a fresh snapshot on success.
    UpdatePronouns {
        /// The proposed stored value.
        value: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A fresh personal-details snapshot.
    ///
    /// Sent after a load and after every successful update, so the store
    /// remains the single source of truth flowing state back to the pane.
    DetailsLoaded {
        /// The current snapshot.
        details: PersonalDetails,
    },

    /// A store operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::update_pronouns("__predefined_faeFaer".to_string());
        let payload = serde_json::to_string(&message).expect("serialize");
        let parsed: WorkerMessage = serde_json::from_str(&payload).expect("deserialize");
        assert_eq!(parsed, message);
    }

    #[test]
    fn absent_trace_context_is_omitted_from_the_wire() {
        // no subscriber in tests, so from_current() yields None
        let message = WorkerMessage::load_details();
        let payload = serde_json::to_string(&message).expect("serialize");
        assert!(!payload.contains("trace_context"));
    }
}
