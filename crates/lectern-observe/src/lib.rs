//! Observability bootstrap for Lectern.

pub mod tracing_setup;
