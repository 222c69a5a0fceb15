//! Checklist entity model.

use chrono::{DateTime, Utc};
use franchise_core::types::{ChecklistId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::progress::{derive_status, kpi_score};
use super::status::ChecklistStatus;
use super::task::{Task, TaskInput, build_tasks};

/// A checklist owned by one user within one tenant.
///
/// `status` and `kpi_score` are derived from `tasks`; use the methods on
/// this type rather than assigning them directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checklist {
    /// Unique checklist identifier.
    pub id: ChecklistId,
    /// Checklist title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Owning user.
    pub user_id: UserId,
    /// Owning tenant.
    pub tenant_id: String,
    /// Derived status.
    pub status: ChecklistStatus,
    /// Tasks ordered by position.
    #[sqlx(json)]
    pub tasks: Vec<Task>,
    /// Completed-task percentage (0 to 100).
    pub kpi_score: f64,
    /// When the checklist was created.
    pub created_at: DateTime<Utc>,
    /// When the checklist was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Checklist {
    /// Recompute status and score from the current tasks.
    pub fn recompute(&mut self) {
        self.status = derive_status(&self.tasks);
        self.kpi_score = kpi_score(&self.tasks);
    }

    /// Replace the task set and recompute derived fields.
    pub fn replace_tasks(&mut self, inputs: Vec<TaskInput>, now: DateTime<Utc>) {
        self.tasks = build_tasks(inputs, &self.tasks, now);
        self.recompute();
        self.updated_at = now;
    }

    /// Force every task to completed, the status to completed and the score to 100.
    ///
    /// Idempotent apart from the timestamp.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        for task in &mut self.tasks {
            task.mark_completed(now);
        }
        self.status = ChecklistStatus::Completed;
        self.kpi_score = 100.0;
        self.updated_at = now;
    }

    /// Merge a partial update.
    ///
    /// Non-empty title and description overwrite. A present task list
    /// replaces the tasks and decides status and score; otherwise an
    /// explicit `completed` status completes the checklist and any other
    /// status re-derives from the existing tasks.
    pub fn apply_update(&mut self, update: UpdateChecklist, now: DateTime<Utc>) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(description) = update.description.filter(|d| !d.is_empty()) {
            self.description = Some(description);
        }
        match (update.tasks, update.status) {
            (Some(tasks), _) => self.replace_tasks(tasks, now),
            (None, Some(ChecklistStatus::Completed)) => self.complete(now),
            (None, _) => self.recompute(),
        }
        self.updated_at = now;
    }
}

/// Data required to create a checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChecklist {
    /// Checklist title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Owning user.
    pub user_id: UserId,
    /// Owning tenant.
    pub tenant_id: String,
    /// Initial tasks.
    pub tasks: Vec<TaskInput>,
}

impl CreateChecklist {
    /// Materialize a checklist with a fresh id and derived status and score.
    pub fn into_checklist(self, now: DateTime<Utc>) -> Checklist {
        let mut checklist = Checklist {
            id: ChecklistId::new(),
            title: self.title,
            description: self.description.filter(|d| !d.is_empty()),
            user_id: self.user_id,
            tenant_id: self.tenant_id,
            status: ChecklistStatus::Pending,
            tasks: build_tasks(self.tasks, &[], now),
            kpi_score: 0.0,
            created_at: now,
            updated_at: now,
        };
        checklist.recompute();
        checklist
    }
}

/// Partial checklist update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChecklist {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Requested status.
    pub status: Option<ChecklistStatus>,
    /// Replacement task set.
    pub tasks: Option<Vec<TaskInput>>,
}
