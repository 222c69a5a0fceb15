//! Role guards for route groups.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use franchise_entity::user::UserRole;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Rejects callers that are not franchise owners.
///
/// Runs the `AuthUser` extractor first, so a missing or bad token is a 401
/// and only an authenticated non-owner gets a 403.
pub async fn require_franchise_owner(
    State(state): State<AppState>,
    auth: AuthUser,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    state
        .rbac
        .require_role(auth.role, UserRole::FranchiseOwner)
        .map_err(|e| e.titled("Insufficient permissions"))?;
    Ok(next.run(request).await)
}
