//! Status and KPI derivation from task state.

use super::status::ChecklistStatus;
use super::task::Task;

/// Derive a checklist's status from its tasks.
///
/// Completed when every task is completed, in progress when any task is
/// started, and pending otherwise (including when there are no tasks).
pub fn derive_status(tasks: &[Task]) -> ChecklistStatus {
    if tasks.is_empty() {
        return ChecklistStatus::Pending;
    }
    if tasks.iter().all(|t| t.status.is_completed()) {
        ChecklistStatus::Completed
    } else if tasks.iter().any(|t| t.status.is_started()) {
        ChecklistStatus::InProgress
    } else {
        ChecklistStatus::Pending
    }
}

/// Percentage of completed tasks, 0 when there are none.
pub fn kpi_score(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.status.is_completed()).count();
    completed as f64 / tasks.len() as f64 * 100.0
}
