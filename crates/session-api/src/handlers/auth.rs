// ============================================================================
// Session API - Auth Handlers
// File: crates/session-api/src/handlers/auth.rs
// ============================================================================
//! Session handlers (dev login, current session)

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use session_shared::constants::AUTH_COOKIE_NAME;
use tracing::info;

use crate::cookies::CurrentRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Dev login payload. Identity is taken as given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevLoginRequest {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// Dev login handler - POST /api/v1/auth/dev-login
///
/// Only mounted in development mode.
pub async fn dev_login(
    State(state): State<AppState>,
    payload: Result<Json<DevLoginRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    state
        .issuer
        .create_session(&CurrentRequest, &payload.user_id, &payload.email)
        .await?;

    info!("Dev login issued session for user: {}", payload.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Current session handler - GET /api/v1/auth/session
pub async fn current_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = jar
        .get(AUTH_COOKIE_NAME)
        .ok_or_else(|| ApiError::Unauthorized("no session".to_string()))?;

    let session = state.signer.verify(token.value())?;

    Ok(Json(SessionResponse {
        user_id: session.claims.user_id,
        email: session.claims.email,
        expires_at: session.expires_at,
    }))
}
