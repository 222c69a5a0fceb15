//! Checklist handlers. Every operation is scoped to the caller's own checklists.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use franchise_core::types::PageResponse;

use crate::dto::request::{CreateChecklistRequest, UpdateChecklistRequest};
use crate::dto::response::{ChecklistResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_checklist_id;
use crate::extractors::{AuthUser, PaginationParams, PathParam, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/checklists
pub async fn list_checklists(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<PageResponse<ChecklistResponse>>> {
    let page = state
        .checklist_service
        .list(&auth, &params.into_page_request())
        .await?;
    Ok(Json(page.map(ChecklistResponse::from)))
}

/// POST /api/v1/checklists
pub async fn create_checklist(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateChecklistRequest>,
) -> ApiResult<(StatusCode, Json<ChecklistResponse>)> {
    let checklist = state.checklist_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(checklist.into())))
}

/// GET /api/v1/checklists/{id}
pub async fn get_checklist(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<ChecklistResponse>> {
    let id = parse_checklist_id(&id)?;
    let checklist = state.checklist_service.get(&auth, id).await?;
    Ok(Json(checklist.into()))
}

/// PUT /api/v1/checklists/{id}
pub async fn update_checklist(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
    ValidatedJson(req): ValidatedJson<UpdateChecklistRequest>,
) -> ApiResult<Json<ChecklistResponse>> {
    let id = parse_checklist_id(&id)?;
    let checklist = state
        .checklist_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(checklist.into()))
}

/// DELETE /api/v1/checklists/{id}
pub async fn delete_checklist(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_checklist_id(&id)?;
    state.checklist_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Checklist deleted successfully")))
}

/// POST /api/v1/checklists/{id}/complete
pub async fn complete_checklist(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<ChecklistResponse>> {
    let id = parse_checklist_id(&id)?;
    let checklist = state.checklist_service.complete(&auth, id).await?;
    Ok(Json(checklist.into()))
}
