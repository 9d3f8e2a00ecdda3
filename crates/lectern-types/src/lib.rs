//! Shared domain types for Lectern.
//!
//! This crate contains the types used across the Lectern service:
//! reader proficiency levels, LLM request/stream-event types, the SSE
//! wire frame, and the validation error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod error;
pub mod llm;
pub mod proficiency;
pub mod stream;
