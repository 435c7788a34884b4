//! Observability subsystem: structured logging and metrics exposition.

pub mod metrics;
