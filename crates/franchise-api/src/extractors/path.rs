//! Typed path parameter helpers.

use std::str::FromStr;

use franchise_core::error::AppError;
use franchise_core::types::{ChecklistId, UserId};

/// Parse a checklist id from a path segment.
pub fn parse_checklist_id(raw: &str) -> Result<ChecklistId, AppError> {
    parse_id(raw, "Invalid checklist ID")
}

/// Parse a user id from a path segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    parse_id(raw, "Invalid user ID")
}

fn parse_id<T: FromStr>(raw: &str, title: &str) -> Result<T, AppError> {
    T::from_str(raw)
        .map_err(|_| AppError::validation(format!("'{raw}' is not a valid UUID")).titled(title))
}
