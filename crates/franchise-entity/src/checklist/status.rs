//! Checklist and task status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a checklist, always derived from its tasks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "checklist_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    /// No task has been started.
    #[default]
    Pending,
    /// At least one task is started or done, but not all are done.
    InProgress,
    /// Every task is done.
    Completed,
}

impl ChecklistStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ChecklistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a single task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Check if the task is done.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if work on the task has begun.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
