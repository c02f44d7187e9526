//! # concord-observability
//!
//! Structured logging for the Concord workspace: subscriber setup driven by
//! `ObservabilityConfig` and the `CONCORD_LOG` filter, plus named events for
//! the operations worth auditing.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
