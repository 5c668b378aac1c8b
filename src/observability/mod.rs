//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans emitted through `tracing` macros flow into the OpenTelemetry SDK and
//! land in a rotating OTLP JSON file under the plugin data directory, where
//! they can be inspected offline:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! The trace file is `zprofile-otlp.json`, rotated at 10 MB with three
//! backups retained. The verbosity is set by the `trace_level` plugin
//! configuration option (default `"info"`).

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
