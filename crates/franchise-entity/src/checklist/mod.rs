//! Checklist domain entities.

pub mod model;
pub mod progress;
pub mod status;
pub mod task;

pub use model::{Checklist, CreateChecklist, UpdateChecklist};
pub use progress::{derive_status, kpi_score};
pub use status::{ChecklistStatus, TaskStatus};
pub use task::{Task, TaskInput, build_tasks};
