//! Auth handlers: register, login, logout, refresh, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, MessageResponse, TokenResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let session = state.auth_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/auth/logout
///
/// Tokens stay valid until they expire; the client discards them.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    state.auth_service.logout(&auth);
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let tokens = state.auth_service.refresh(&req.refresh_token)?;
    Ok(Json(tokens.into()))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(user.into()))
}
