//! Checklist lifecycle service.

pub mod service;

pub use service::{ChecklistService, NewChecklist};
