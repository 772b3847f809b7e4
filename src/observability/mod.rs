//! Observability module for monitoring import/export activity.
//!
//! Structured logging goes through `tracing`; this module adds counters that
//! the services update and the CLI can print.

pub mod metrics;

pub use metrics::{Timer, TransferMetrics};
