//! Infrastructure implementations for Lectern.
//!
//! Provides the concrete `LlmProvider` backend: an OpenAI-compatible
//! chat-completions client (Gemini's compatibility endpoint by
//! default) with a typed streaming decoder.

pub mod llm;
