//! Generation adapter and instruction building.
//!
//! - `client`: wraps the LLM provider into a text-fragment stream
//! - `instructions`: summarizer/personalizer instruction builders
//! - `session`: deterministic session-key derivation

pub mod client;
pub mod instructions;
pub mod session;
