//! Route handlers.
//!
//! - `summarize`: GET /api/v1/summarize (streaming)
//! - `personalize`: GET /api/v1/personalize (streaming)
//! - `auth`: POST /api/v1/dummy-login, GET /api/v1/verify (placeholder)

pub mod auth;
pub mod personalize;
pub mod summarize;

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for handler tests: a scripted provider with a
    //! call counter, and SSE body parsing.

    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::response::Response;
    use futures_util::stream;

    use lectern_core::llm::provider::{EventStream, LlmProvider};
    use lectern_types::llm::{CompletionRequest, LlmError, StopReason, StreamEvent};
    use lectern_types::stream::StreamFrame;

    use crate::state::AppState;

    /// Provider that replays a fixed event script and counts calls.
    pub struct ScriptedProvider {
        events: Mutex<Option<Vec<Result<StreamEvent, LlmError>>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedProvider {
        pub fn new(events: Vec<Result<StreamEvent, LlmError>>) -> (Arc<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Arc::new(Self {
                events: Mutex::new(Some(events)),
                calls: calls.clone(),
            });
            (provider, calls)
        }

        /// A script that streams the given fragments and completes.
        pub fn completing(fragments: &[&str]) -> Vec<Result<StreamEvent, LlmError>> {
            let mut events: Vec<Result<StreamEvent, LlmError>> = vec![Ok(StreamEvent::Connected)];
            for fragment in fragments {
                events.push(Ok(StreamEvent::TextDelta {
                    text: (*fragment).to_string(),
                }));
            }
            events.push(Ok(StreamEvent::MessageDelta {
                stop_reason: StopReason::EndTurn,
            }));
            events.push(Ok(StreamEvent::Done));
            events
        }

        /// A script that streams the given fragments, then fails.
        pub fn failing_after(fragments: &[&str], message: &str) -> Vec<Result<StreamEvent, LlmError>> {
            let mut events: Vec<Result<StreamEvent, LlmError>> = vec![Ok(StreamEvent::Connected)];
            for fragment in fragments {
                events.push(Ok(StreamEvent::TextDelta {
                    text: (*fragment).to_string(),
                }));
            }
            events.push(Err(LlmError::Stream(message.to_string())));
            events
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        fn stream(&self, _request: CompletionRequest) -> EventStream {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let events = self.events.lock().unwrap().take().unwrap_or_default();
            Box::pin(stream::iter(events))
        }
    }

    /// App state around a scripted provider, plus its call counter.
    pub fn scripted_state(
        events: Vec<Result<StreamEvent, LlmError>>,
    ) -> (AppState, Arc<AtomicUsize>) {
        let (provider, calls) = ScriptedProvider::new(events);
        (
            AppState::new(provider, "test-model".to_string(), 1024),
            calls,
        )
    }

    /// Read a finished response body and parse its SSE frames.
    pub async fn collect_frames(response: Response) -> Vec<StreamFrame> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        body.lines()
            .filter_map(|line| line.strip_prefix("data: "))
            .map(|data| serde_json::from_str(data).unwrap())
            .collect()
    }

    /// Read a finished response body as a JSON value.
    pub async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
