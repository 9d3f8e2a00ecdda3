//! The SSE wire frame relayed to clients.
//!
//! Every frame of a streaming response serializes to
//! `{"chunk": <text>, "done": <bool>}` with an optional `"error"` field
//! on the single terminal failure frame. Field names and order are a
//! wire contract consumed by the existing frontend `EventSource`
//! handlers; do not reorder.

use serde::{Deserialize, Serialize};

/// One frame of a streaming response.
///
/// A well-formed stream is zero or more `done: false` frames followed
/// by exactly one `done: true` frame, which carries `error` only when
/// the stream failed mid-generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFrame {
    /// Incremental generated text; empty on terminal frames.
    pub chunk: String,
    /// Whether this is the terminal frame of the stream.
    pub done: bool,
    /// Failure description, present only on a terminal failure frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StreamFrame {
    /// A content frame carrying one fragment of generated text.
    pub fn chunk(text: impl Into<String>) -> Self {
        Self {
            chunk: text.into(),
            done: false,
            error: None,
        }
    }

    /// The terminal frame of a successfully completed stream.
    pub fn done() -> Self {
        Self {
            chunk: String::new(),
            done: true,
            error: None,
        }
    }

    /// The terminal frame of a failed stream.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            chunk: String::new(),
            done: true,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_frame_json_shape() {
        let json = serde_json::to_string(&StreamFrame::chunk("The rise of")).unwrap();
        assert_eq!(json, r#"{"chunk":"The rise of","done":false}"#);
    }

    #[test]
    fn test_done_frame_json_shape() {
        let json = serde_json::to_string(&StreamFrame::done()).unwrap();
        assert_eq!(json, r#"{"chunk":"","done":true}"#);
    }

    #[test]
    fn test_failed_frame_json_shape() {
        let json = serde_json::to_string(&StreamFrame::failed("upstream hung up")).unwrap();
        assert_eq!(json, r#"{"chunk":"","done":true,"error":"upstream hung up"}"#);
    }

    #[test]
    fn test_frame_roundtrip() {
        let frame = StreamFrame::failed("boom");
        let json = serde_json::to_string(&frame).unwrap();
        let parsed: StreamFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }
}
