//! Task entity model.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use franchise_core::types::TaskId;
use serde::{Deserialize, Serialize};

use super::status::TaskStatus;

/// A single task owned by a checklist. Stored inline with its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Completion status.
    pub status: TaskStatus,
    /// Position within the checklist (ascending).
    pub order: i32,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Mark the task completed. Returns `true` if the status changed.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.is_completed() {
            return false;
        }
        self.status = TaskStatus::Completed;
        self.updated_at = now;
        true
    }
}

/// A task as supplied by a client when creating or replacing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInput {
    /// Existing task id to keep; a fresh one is assigned when absent.
    pub id: Option<TaskId>,
    /// Task title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Initial status (defaults to pending).
    pub status: Option<TaskStatus>,
    /// Explicit position; defaults to the index in the submitted list.
    pub order: Option<i32>,
}

/// Build a task list from client input, sorted by `order`.
///
/// Tasks whose id matches one in `existing` keep their creation time.
/// An id repeated within `inputs` is honoured once; later repeats are
/// treated as new tasks and get fresh ids.
pub fn build_tasks(inputs: Vec<TaskInput>, existing: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(inputs.len());
    let mut tasks: Vec<Task> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let id = input
                .id
                .filter(|id| seen.insert(*id))
                .unwrap_or_else(|| {
                    let fresh = TaskId::new();
                    seen.insert(fresh);
                    fresh
                });
            let created_at = existing
                .iter()
                .find(|t| t.id == id)
                .map_or(now, |t| t.created_at);
            Task {
                id,
                title: input.title,
                description: input.description.unwrap_or_default(),
                status: input.status.unwrap_or_default(),
                order: input.order.unwrap_or(index as i32),
                created_at,
                updated_at: now,
            }
        })
        .collect();
    tasks.sort_by_key(|t| t.order);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tasks_sorts_and_assigns_ids() {
        let now = Utc::now();
        let tasks = build_tasks(
            vec![
                TaskInput {
                    title: "second".into(),
                    order: Some(2),
                    ..Default::default()
                },
                TaskInput {
                    title: "first".into(),
                    order: Some(1),
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            ],
            &[],
            now,
        );
        assert_eq!(tasks[0].title, "first");
        assert_eq!(tasks[1].title, "second");
        assert_ne!(tasks[0].id, tasks[1].id);
        assert_eq!(tasks[1].status, TaskStatus::Pending);
        assert_eq!(tasks[0].created_at, now);
    }

    #[test]
    fn test_build_tasks_repeated_id_gets_fresh_id() {
        let now = Utc::now();
        let id = TaskId::new();
        let tasks = build_tasks(
            vec![
                TaskInput {
                    id: Some(id),
                    title: "original".into(),
                    ..Default::default()
                },
                TaskInput {
                    id: Some(id),
                    title: "copy".into(),
                    ..Default::default()
                },
            ],
            &[],
            now,
        );
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "original");
        assert_ne!(tasks[1].id, id);
    }

    #[test]
    fn test_build_tasks_keeps_existing_creation_time() {
        let earlier = Utc::now() - chrono::Duration::hours(1);
        let original = build_tasks(
            vec![TaskInput {
                title: "keep".into(),
                ..Default::default()
            }],
            &[],
            earlier,
        );
        let now = Utc::now();
        let replaced = build_tasks(
            vec![TaskInput {
                id: Some(original[0].id),
                title: "renamed".into(),
                ..Default::default()
            }],
            &original,
            now,
        );
        assert_eq!(replaced[0].id, original[0].id);
        assert_eq!(replaced[0].created_at, earlier);
        assert_eq!(replaced[0].updated_at, now);
    }
}
