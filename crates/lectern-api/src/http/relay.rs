//! SSE relay: fragment stream to Server-Sent Events response.
//!
//! Encodes each text fragment as one `data:` frame and appends exactly
//! one terminal frame: `{"chunk":"","done":true}` on completion, or the
//! same with an `error` field when the upstream stream fails. A failure
//! never crosses the response boundary as a transport error -- the
//! connection always terminates cleanly. Dropping the response (client
//! disconnect) drops the fragment stream and with it the upstream call.

use std::convert::Infallible;
use std::time::Duration;

use axum::http::header::{CACHE_CONTROL, CONNECTION};
use axum::http::{HeaderName, HeaderValue};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;
use tracing::{debug, warn};

use lectern_core::agent::client::FragmentStream;
use lectern_types::stream::StreamFrame;

/// Interval between SSE keep-alive comments.
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Relay a fragment stream as an SSE response.
///
/// `page_id` is used for log correlation only.
pub fn stream_frames(mut fragments: FragmentStream, page_id: String) -> Response {
    let sse_stream = async_stream::stream! {
        let mut failed = false;

        while let Some(next) = fragments.next().await {
            match next {
                Ok(chunk) => {
                    yield Ok::<_, Infallible>(frame_event(&StreamFrame::chunk(chunk)));
                }
                Err(err) => {
                    warn!(page_id = %page_id, error = %err, "stream failed, emitting terminal error frame");
                    yield Ok(frame_event(&StreamFrame::failed(err.to_string())));
                    failed = true;
                    break;
                }
            }
        }

        // The error frame is already terminal; emit `done` only on the
        // success path so exactly one frame carries done=true.
        if !failed {
            debug!(page_id = %page_id, "stream completed");
            yield Ok(frame_event(&StreamFrame::done()));
        }
    };

    let mut response = Sse::new(sse_stream)
        .keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
        .into_response();

    // Intermediaries must not buffer or cache fragments; the
    // x-accel-buffering header disables nginx proxy buffering.
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        HeaderName::from_static("x-accel-buffering"),
        HeaderValue::from_static("no"),
    );

    response
}

/// Encode a frame as an SSE `data:` event.
fn frame_event(frame: &StreamFrame) -> Event {
    let data = serde_json::to_string(frame).unwrap_or_else(|_| {
        r#"{"chunk":"","done":true,"error":"frame serialization failure"}"#.to_string()
    });
    Event::default().data(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures_util::stream;

    use lectern_types::llm::LlmError;

    use crate::http::handlers::testing::collect_frames;

    fn fragments(items: Vec<Result<String, LlmError>>) -> FragmentStream {
        Box::pin(stream::iter(items))
    }

    #[tokio::test]
    async fn test_relay_sets_streaming_headers() {
        let response = stream_frames(fragments(vec![]), "page-1".to_string());

        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
        assert_eq!(response.headers().get("cache-control").unwrap(), "no-cache");
        assert_eq!(response.headers().get("x-accel-buffering").unwrap(), "no");
    }

    #[tokio::test]
    async fn test_relay_appends_single_done_frame() {
        let response = stream_frames(
            fragments(vec![Ok("The ".to_string()), Ok("summary".to_string())]),
            "page-1".to_string(),
        );

        let frames = collect_frames(response).await;
        assert_eq!(
            frames,
            vec![
                StreamFrame::chunk("The "),
                StreamFrame::chunk("summary"),
                StreamFrame::done(),
            ]
        );
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }

    #[tokio::test]
    async fn test_relay_empty_stream_still_terminates() {
        let frames = collect_frames(stream_frames(fragments(vec![]), "page-1".to_string())).await;
        assert_eq!(frames, vec![StreamFrame::done()]);
    }

    #[tokio::test]
    async fn test_relay_converts_failure_to_terminal_error_frame() {
        let response = stream_frames(
            fragments(vec![
                Ok("partial ".to_string()),
                Ok("output".to_string()),
                Err(LlmError::Stream("connection reset".to_string())),
            ]),
            "page-1".to_string(),
        );

        let frames = collect_frames(response).await;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], StreamFrame::chunk("partial "));
        assert_eq!(frames[1], StreamFrame::chunk("output"));
        assert!(frames[2].done);
        assert!(
            frames[2]
                .error
                .as_deref()
                .unwrap()
                .contains("connection reset")
        );
        // The error frame is the single terminal frame.
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }
}
