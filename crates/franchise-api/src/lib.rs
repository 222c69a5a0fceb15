//! # franchise-api
//!
//! HTTP API layer built on Axum.
//!
//! Provides the `/api/v1` REST endpoints, middleware (request logging,
//! role guard, CORS, compression), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
