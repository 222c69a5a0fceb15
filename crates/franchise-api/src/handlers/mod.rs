//! Route handlers organized by domain.

pub mod auth;
pub mod checklist;
pub mod dealer;
pub mod health;
pub mod user;

use franchise_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("The requested resource does not exist")
        .titled("Route not found")
        .into()
}
