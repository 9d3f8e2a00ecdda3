//! HTTP/REST API layer for Lectern.
//!
//! Axum-based API at `/api/v1/` relaying LLM generations as SSE
//! streams, with fail-fast validation and the placeholder auth
//! endpoints.

pub mod error;
pub mod handlers;
pub mod relay;
pub mod router;
