//! PostgreSQL checklist repository. Tasks live in a JSONB column.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use franchise_core::error::{AppError, ErrorKind};
use franchise_core::result::AppResult;
use franchise_core::types::{ChecklistId, PageRequest, PageResponse, UserId};
use franchise_entity::checklist::Checklist;

use crate::store::ChecklistStore;

/// Repository for checklist rows.
#[derive(Debug, Clone)]
pub struct ChecklistRepository {
    pool: PgPool,
}

impl ChecklistRepository {
    /// Create a new checklist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChecklistStore for ChecklistRepository {
    async fn find_by_id(&self, id: ChecklistId, user_id: UserId) -> AppResult<Option<Checklist>> {
        sqlx::query_as::<_, Checklist>("SELECT * FROM checklists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find checklist", e))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Checklist>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM checklists WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count checklists", e)
            })?;

        let checklists = sqlx::query_as::<_, Checklist>(
            "SELECT * FROM checklists WHERE user_id = $1 \
             ORDER BY created_at DESC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list checklists", e))?;

        Ok(PageResponse::new(checklists, page, total as u64))
    }

    async fn create(&self, checklist: &Checklist) -> AppResult<Checklist> {
        sqlx::query_as::<_, Checklist>(
            "INSERT INTO checklists (id, title, description, user_id, tenant_id, status, tasks, \
                                     kpi_score, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(checklist.id)
        .bind(&checklist.title)
        .bind(&checklist.description)
        .bind(checklist.user_id)
        .bind(&checklist.tenant_id)
        .bind(checklist.status)
        .bind(Json(&checklist.tasks))
        .bind(checklist.kpi_score)
        .bind(checklist.created_at)
        .bind(checklist.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create checklist", e))
    }

    async fn update(&self, checklist: &Checklist) -> AppResult<Checklist> {
        sqlx::query_as::<_, Checklist>(
            "UPDATE checklists SET title = $3, description = $4, status = $5, tasks = $6, \
                                   kpi_score = $7, updated_at = $8 \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(checklist.id)
        .bind(checklist.user_id)
        .bind(&checklist.title)
        .bind(&checklist.description)
        .bind(checklist.status)
        .bind(Json(&checklist.tasks))
        .bind(checklist.kpi_score)
        .bind(checklist.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update checklist", e))?
        .ok_or_else(|| {
            AppError::not_found(format!("Checklist {} not found", checklist.id))
                .titled("Checklist not found")
        })
    }

    async fn delete(&self, id: ChecklistId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM checklists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete checklist", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
