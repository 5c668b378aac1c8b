//! Background worker thread for asynchronous profile store operations.
//!
//! All storage I/O runs here so the main plugin thread never blocks. Uses
//! Zellij's worker API for cross-thread communication, with distributed
//! tracing support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context
//!   propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ZprofileWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
