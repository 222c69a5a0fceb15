//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use auth::AuthUser;
pub use json::ValidatedJson;
pub use pagination::PaginationParams;
pub use query::{PathParam, QueryParams};
