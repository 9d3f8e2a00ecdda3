//! LlmProvider trait definition.
//!
//! This is the abstraction the agent client talks through. It is
//! deliberately object-safe (`stream` returns a boxed stream rather
//! than an opaque RPITIT type) so that `AgentClient` can hold an
//! `Arc<dyn LlmProvider>` and tests can substitute scripted providers.

use std::pin::Pin;

use futures_util::Stream;

use lectern_types::llm::{CompletionRequest, LlmError, StreamEvent};

/// A boxed stream of provider protocol events.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + 'static>>;

/// Trait for streaming LLM provider backends.
///
/// The concrete implementation lives in `lectern-infra`
/// (`OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a streaming completion request. Returns a finite stream of
    /// events; a failed call yields a single `Err` item.
    fn stream(&self, request: CompletionRequest) -> EventStream;
}
