//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it, and exposes the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use franchise_core::error::AppError;
use franchise_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Authorization header is required"))?;

        let token = bearer_token(header)
            .ok_or_else(|| unauthorized("Authorization header must be 'Bearer <token>'"))?;

        let claims = state
            .tokens
            .validate(token)
            .map_err(|e| e.titled("Invalid token"))?;

        Ok(AuthUser(RequestContext::from(claims)))
    }
}

/// Accept exactly `Bearer <token>` with a single space and a non-empty token.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    (scheme == "Bearer" && !token.is_empty() && !token.contains(char::is_whitespace))
        .then_some(token)
}

fn unauthorized(message: &str) -> AppError {
    AppError::authentication(message).titled("Authorization required")
}
