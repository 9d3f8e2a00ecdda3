//! SSE streaming summarization endpoint.
//!
//! GET /api/v1/summarize?pageId&token&content
//!
//! Validates, builds the summarizer instructions, starts one generation
//! through the agent client, and relays its fragments as SSE frames.
//! Rejections happen before the stream opens; once streaming starts,
//! failures degrade to the in-band terminal error frame.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use tracing::{info, warn};

use lectern_core::agent::{instructions, session};
use lectern_core::validate::{self, token_preview};

use crate::http::error::AppError;
use crate::http::relay;
use crate::state::AppState;

/// Query parameters for the summarization endpoint.
///
/// All fields are optional strings so the validation layer -- not the
/// framework -- classifies absences (a missing token must map to 401).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeQuery {
    pub page_id: Option<String>,
    pub token: Option<String>,
    pub content: Option<String>,
}

/// GET /api/v1/summarize -- stream a proportional summary of the content.
pub async fn summarize(
    State(state): State<AppState>,
    Query(query): Query<SummarizeQuery>,
) -> Result<Response, AppError> {
    let page_id = query.page_id.unwrap_or_default();
    let token = query.token.unwrap_or_default();
    let content = query.content.unwrap_or_default();

    if let Err(err) = validate::validate_summarize(&page_id, &token, &content) {
        warn!(
            page_id = %page_id,
            token = %token_preview(&token),
            content_chars = content.chars().count(),
            error = %err,
            "summarize request rejected"
        );
        return Err(err.into());
    }

    info!(
        page_id = %page_id,
        content_chars = content.chars().count(),
        "summarize request"
    );

    let instructions = instructions::summarizer_instructions(&content);
    let session_key = session::summary_session_key(&page_id);
    let input = format!("Summarize this content:\n\n{content}");

    let fragments = state.agent.generate(input, instructions, session_key);
    Ok(relay::stream_frames(fragments, page_id))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use lectern_types::stream::StreamFrame;

    use crate::http::handlers::testing::{
        ScriptedProvider, collect_frames, json_body, scripted_state,
    };
    use crate::http::router::build_router;

    fn summarize_uri(token: &str, content_chars: usize) -> String {
        format!(
            "/api/v1/summarize?pageId=chapter-01&token={token}&content={}",
            "a".repeat(content_chars)
        )
    }

    #[tokio::test]
    async fn test_short_content_rejected_before_upstream_call() {
        let (state, calls) = scripted_state(ScriptedProvider::completing(&["unused"]));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(summarize_uri("dummy_token_12345", 49))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Content too short to summarize");
    }

    #[tokio::test]
    async fn test_missing_token_rejected_with_401() {
        let (state, calls) = scripted_state(ScriptedProvider::completing(&["unused"]));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(format!(
                    "/api/v1/summarize?pageId=chapter-01&content={}",
                    "a".repeat(60)
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Missing or invalid authentication token");
    }

    #[tokio::test]
    async fn test_empty_token_treated_as_missing() {
        let (state, _calls) = scripted_state(ScriptedProvider::completing(&["unused"]));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(summarize_uri("", 60))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Missing or invalid authentication token");
    }

    #[tokio::test]
    async fn test_successful_stream_has_single_terminal_frame() {
        let (state, calls) =
            scripted_state(ScriptedProvider::completing(&["This page ", "covers X."]));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(summarize_uri("dummy_token_12345", 60))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let frames = collect_frames(response).await;
        assert_eq!(
            frames,
            vec![
                StreamFrame::chunk("This page "),
                StreamFrame::chunk("covers X."),
                StreamFrame::done(),
            ]
        );
    }

    #[tokio::test]
    async fn test_midstream_failure_degrades_to_error_frame() {
        let (state, _calls) = scripted_state(ScriptedProvider::failing_after(
            &["one", "two"],
            "upstream hung up",
        ));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(summarize_uri("dummy_token_12345", 60))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Streaming already started: the HTTP status stays 200.
        assert_eq!(response.status(), StatusCode::OK);

        let frames = collect_frames(response).await;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], StreamFrame::chunk("one"));
        assert_eq!(frames[1], StreamFrame::chunk("two"));
        assert!(frames[2].done);
        assert!(
            frames[2]
                .error
                .as_deref()
                .unwrap()
                .contains("upstream hung up")
        );
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }

    #[tokio::test]
    async fn test_out_of_format_token_accepted() {
        let (state, calls) = scripted_state(ScriptedProvider::completing(&["ok"]));
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::get(summarize_uri("legacy-sso-token", 60))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
