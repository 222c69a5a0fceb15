//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod logging;
pub mod rbac;
