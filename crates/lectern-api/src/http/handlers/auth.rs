//! Placeholder authentication endpoints.
//!
//! POST /api/v1/dummy-login always succeeds and returns a fixed token;
//! GET /api/v1/verify accepts any non-empty token. Neither is a real
//! auth boundary -- the contract is preserved exactly for client
//! compatibility until SSO replaces it.

use axum::Json;
use axum::extract::Query;
use serde::{Deserialize, Serialize};
use tracing::info;

use lectern_core::validate::token_preview;

use crate::http::error::AppError;

/// The user identity every placeholder response carries.
#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
}

impl AuthUser {
    fn dummy() -> Self {
        Self {
            id: "dummy_user".to_string(),
            name: "Anonymous User".to_string(),
        }
    }
}

/// Response body for POST /dummy-login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires: String,
    pub user: AuthUser,
}

/// Response body for GET /verify.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: AuthUser,
}

/// POST /api/v1/dummy-login -- always succeeds with a fixed token.
pub async fn dummy_login() -> Json<LoginResponse> {
    info!("dummy login request");

    Json(LoginResponse {
        token: "dummy_token_12345".to_string(),
        expires: "session".to_string(),
        user: AuthUser::dummy(),
    })
}

/// Query parameters for GET /verify.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub token: Option<String>,
}

/// GET /api/v1/verify -- accepts any non-empty token.
pub async fn verify(Query(query): Query<VerifyQuery>) -> Result<Json<VerifyResponse>, AppError> {
    let token = query.token.unwrap_or_default();
    if token.trim().is_empty() {
        return Err(AppError::Unauthenticated("Token required".to_string()));
    }

    info!(token = %token_preview(&token), "token verification request");

    Ok(Json(VerifyResponse {
        valid: true,
        user: AuthUser::dummy(),
    }))
}
