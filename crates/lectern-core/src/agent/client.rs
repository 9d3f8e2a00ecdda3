//! AgentClient -- the single seam between route handlers and the LLM.
//!
//! `generate()` issues exactly one streaming call to the configured
//! provider and exposes a finite, non-restartable stream of raw text
//! fragments. Non-text protocol events are consumed here (debug logs
//! only); any upstream failure surfaces as a single terminal `Err`
//! item rather than silent truncation. OTel GenAI spans instrument
//! every call for the full streaming duration.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use tracing::{debug, info_span};

use lectern_types::llm::{CompletionRequest, LlmError, Message, MessageRole, StreamEvent};

use crate::llm::provider::LlmProvider;

/// Upper bound on the wait for each upstream fragment. Generations can
/// legitimately pause between fragments, but a stall past this bound is
/// treated as an upstream failure and ends the stream in-band.
const FRAGMENT_TIMEOUT: Duration = Duration::from_secs(300);

/// A boxed stream of generated text fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send + 'static>>;

/// Executes LLM generations on behalf of the route handlers.
///
/// Holds the provider plus the immutable model configuration resolved
/// at process start; handlers supply only per-request input,
/// instructions, and a session key.
pub struct AgentClient {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_output_tokens: u32,
}

impl AgentClient {
    /// Create a new agent client for the given provider and model.
    pub fn new(provider: Arc<dyn LlmProvider>, model: String, max_output_tokens: u32) -> Self {
        Self {
            provider,
            model,
            max_output_tokens,
        }
    }

    /// Start a generation and return its lazy fragment stream.
    ///
    /// Issues one streaming call with `instructions` as the system
    /// prompt and `input` as the sole user message, then filters the
    /// provider's protocol events down to non-empty text deltas. The
    /// stream is finite and cannot be restarted; dropping it releases
    /// the upstream call.
    pub fn generate(
        &self,
        input: String,
        instructions: String,
        session_key: String,
    ) -> FragmentStream {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: input,
            }],
            system: Some(instructions),
            max_tokens: self.max_output_tokens,
            temperature: None,
            stream: true,
        };

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            session_key = %session_key,
        );

        let mut events = self.provider.stream(request);

        let fragments = async_stream::try_stream! {
            loop {
                let next = tokio::time::timeout(FRAGMENT_TIMEOUT, events.next())
                    .await
                    .map_err(|_| {
                        LlmError::Stream(format!(
                            "no fragment from provider within {}s",
                            FRAGMENT_TIMEOUT.as_secs()
                        ))
                    })?;

                let event = match next {
                    Some(event) => event,
                    None => break,
                };

                match event? {
                    StreamEvent::TextDelta { text } => {
                        if !text.is_empty() {
                            yield text;
                        }
                    }
                    StreamEvent::MessageDelta { stop_reason } => {
                        debug!(%stop_reason, "generation finishing");
                    }
                    StreamEvent::Usage(usage) => {
                        debug!(
                            input_tokens = usage.input_tokens,
                            output_tokens = usage.output_tokens,
                            "usage reported"
                        );
                    }
                    StreamEvent::Connected => {
                        debug!("provider stream connected");
                    }
                    StreamEvent::Done => break,
                }
            }
        };

        Box::pin(StreamInSpan {
            inner: Box::pin(fragments),
            span,
        })
    }
}

/// A stream wrapper that keeps the GenAI span alive while streaming.
///
/// Without this, the span would close immediately after `generate()`
/// returns, losing the instrumentation for the streaming duration.
struct StreamInSpan {
    inner: Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send + 'static>>,
    span: tracing::Span,
}

impl Stream for StreamInSpan {
    type Item = Result<String, LlmError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // Both fields are Unpin, so plain get_mut suffices.
        let this = self.get_mut();
        let _enter = this.span.enter();
        this.inner.as_mut().poll_next(cx)
    }
}
