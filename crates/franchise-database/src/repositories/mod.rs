//! Repository implementations for users and checklists.

pub mod checklist;
pub mod memory;
pub mod user;

pub use checklist::ChecklistRepository;
pub use memory::{MemoryChecklistStore, MemoryUserStore};
pub use user::UserRepository;
