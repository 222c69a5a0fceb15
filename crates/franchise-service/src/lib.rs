//! # franchise-service
//!
//! Business logic service layer. Each service orchestrates the store
//! traits and the auth primitives to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod checklist;
pub mod context;
pub mod user;

pub use auth::{AuthService, AuthSession, RegisterInput};
pub use checklist::{ChecklistService, NewChecklist};
pub use context::RequestContext;
pub use user::UserService;
