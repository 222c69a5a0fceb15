//! Checklist CRUD and completion, always scoped to the calling user.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use franchise_auth::rbac::{Permission, RbacEnforcer};
use franchise_core::error::AppError;
use franchise_core::types::{ChecklistId, PageRequest, PageResponse};
use franchise_database::ChecklistStore;
use franchise_entity::checklist::{Checklist, CreateChecklist, TaskInput, UpdateChecklist};

use crate::context::RequestContext;

/// Checklist data accepted from a client. Owner and tenant come from the
/// request context.
#[derive(Debug, Clone, Default)]
pub struct NewChecklist {
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Initial tasks.
    pub tasks: Vec<TaskInput>,
}

/// Checklist use cases.
#[derive(Debug, Clone)]
pub struct ChecklistService {
    checklists: Arc<dyn ChecklistStore>,
    rbac: Arc<RbacEnforcer>,
}

impl ChecklistService {
    /// Creates a new checklist service.
    pub fn new(checklists: Arc<dyn ChecklistStore>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { checklists, rbac }
    }

    /// One page of the caller's checklists, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<Checklist>, AppError> {
        self.checklists.list_by_user(ctx.user_id, page).await
    }

    /// Fetch one of the caller's checklists.
    pub async fn get(&self, ctx: &RequestContext, id: ChecklistId) -> Result<Checklist, AppError> {
        self.checklists
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a checklist owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: NewChecklist,
    ) -> Result<Checklist, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ManageChecklists)?;

        let checklist = CreateChecklist {
            title: input.title,
            description: input.description,
            user_id: ctx.user_id,
            tenant_id: ctx.tenant_id.clone(),
            tasks: input.tasks,
        }
        .into_checklist(Utc::now());

        let checklist = self.checklists.create(&checklist).await?;
        info!(
            checklist_id = %checklist.id,
            user_id = %ctx.user_id,
            tasks = checklist.tasks.len(),
            "Checklist created"
        );
        Ok(checklist)
    }

    /// Merge a partial update into one of the caller's checklists.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ChecklistId,
        update: UpdateChecklist,
    ) -> Result<Checklist, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ManageChecklists)?;

        let mut checklist = self.get(ctx, id).await?;
        checklist.apply_update(update, Utc::now());

        let checklist = self.checklists.update(&checklist).await?;
        info!(
            checklist_id = %id,
            status = %checklist.status,
            kpi_score = checklist.kpi_score,
            "Checklist updated"
        );
        Ok(checklist)
    }

    /// Delete one of the caller's checklists.
    pub async fn delete(&self, ctx: &RequestContext, id: ChecklistId) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ManageChecklists)?;

        if !self.checklists.delete(id, ctx.user_id).await? {
            return Err(not_found(id));
        }
        info!(checklist_id = %id, user_id = %ctx.user_id, "Checklist deleted");
        Ok(())
    }

    /// Mark every task and the checklist completed with a score of 100.
    pub async fn complete(
        &self,
        ctx: &RequestContext,
        id: ChecklistId,
    ) -> Result<Checklist, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ManageChecklists)?;

        let mut checklist = self.get(ctx, id).await?;
        checklist.complete(Utc::now());

        let checklist = self.checklists.update(&checklist).await?;
        info!(checklist_id = %id, user_id = %ctx.user_id, "Checklist completed");
        Ok(checklist)
    }
}

fn not_found(id: ChecklistId) -> AppError {
    AppError::not_found(format!("Checklist {id} not found")).titled("Checklist not found")
}
