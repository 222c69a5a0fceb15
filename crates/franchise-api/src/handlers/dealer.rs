//! Dealer directory handlers (franchise owners only).

use axum::Json;
use axum::extract::State;

use crate::dto::request::DealerQuery;
use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PathParam, QueryParams};
use crate::extractors::path::parse_user_id;
use crate::state::AppState;

/// GET /api/v1/dealers
pub async fn list_dealers(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<DealerQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_dealers(&auth, query.role()?).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/dealers/{id}
pub async fn get_dealer(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_user_id(&id).map_err(|e| e.titled("Invalid dealer ID"))?;
    let user = state.user_service.get_dealer(&auth, id).await?;
    Ok(Json(user.into()))
}
