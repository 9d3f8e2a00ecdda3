//! SSE streaming personalization endpoint.
//!
//! GET /api/v1/personalize?pageId&content&token&programmingLevel&aiLevel
//!
//! Mirrors the summarization flow but selects the instruction text from
//! the persona table keyed by the two proficiency levels.

use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use tracing::{info, warn};

use lectern_core::agent::{instructions, session};
use lectern_core::validate::{self, token_preview};

use crate::http::error::AppError;
use crate::http::relay;
use crate::state::AppState;

/// Query parameters for the personalization endpoint.
///
/// Optional strings for the same reason as `SummarizeQuery`: the
/// validation layer owns absence classification and error ordering.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizeQuery {
    pub page_id: Option<String>,
    pub token: Option<String>,
    pub content: Option<String>,
    pub programming_level: Option<String>,
    pub ai_level: Option<String>,
}

/// GET /api/v1/personalize -- stream a proficiency-tailored rewrite.
pub async fn personalize(
    State(state): State<AppState>,
    Query(query): Query<PersonalizeQuery>,
) -> Result<Response, AppError> {
    let page_id = query.page_id.unwrap_or_default();
    let token = query.token.unwrap_or_default();
    let content = query.content.unwrap_or_default();
    let programming_level = query.programming_level.unwrap_or_default();
    let ai_level = query.ai_level.unwrap_or_default();

    let (programming, ai) = match validate::validate_personalize(
        &page_id,
        &token,
        &content,
        &programming_level,
        &ai_level,
    ) {
        Ok(levels) => levels,
        Err(err) => {
            warn!(
                page_id = %page_id,
                token = %token_preview(&token),
                content_chars = content.chars().count(),
                programming_level = %programming_level,
                ai_level = %ai_level,
                error = %err,
                "personalize request rejected"
            );
            return Err(err.into());
        }
    };

    info!(
        page_id = %page_id,
        programming = %programming,
        ai = %ai,
        content_chars = content.chars().count(),
        "personalize request"
    );

    let instructions = instructions::personalizer_instructions(programming, ai);
    let session_key = session::personalization_session_key(&page_id, programming, ai);
    let input = format!("Personalize this content:\n\n{content}");

    let fragments = state.agent.generate(input, instructions, session_key);
    Ok(relay::stream_frames(fragments, page_id))
}
