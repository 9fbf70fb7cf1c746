//! Authentication handlers (login, refresh, revoke)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalogo_auth_core::AuthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/auth/login
///
/// Exchange credentials for an access/refresh token pair
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let pair = state.auth.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        expiration: pair.expires_at,
    }))
}

/// POST /api/v1/auth/refresh
///
/// Rotate a session: expired access token + refresh token -> fresh pair
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    if req.access_token.is_empty() || req.refresh_token.is_empty() {
        return Err(ApiError::BadRequest("Invalid client request".to_string()));
    }

    let pair = state
        .auth
        .refresh(&req.access_token, &req.refresh_token)
        .await
        .map_err(|e| match e {
            // Token and rotation failures surface as a client error with a
            // fixed reason, without distinguishing which check failed
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::InvalidCredentials
            | AuthError::UserNotFound => {
                ApiError::BadRequest("Invalid access token/refresh token".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(Json(RefreshResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// POST /api/v1/auth/revoke/{username}
///
/// Revoke a user's session. Callers may revoke their own session; revoking
/// another user's requires the admin role.
pub async fn revoke(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<StatusCode> {
    if auth_user.username != username && !auth_user.is_admin() {
        return Err(ApiError::Forbidden(
            "Cannot revoke another user's session".to_string(),
        ));
    }

    state.auth.revoke(&username).await?;

    Ok(StatusCode::NO_CONTENT)
}
