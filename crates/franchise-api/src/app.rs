//! Application builder: wires router, middleware and state into an Axum app
//! and runs it.

use std::future::Future;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::{BoxError, Router};
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::trace::TraceLayer;
use tracing::info;

use franchise_core::error::{AppError, ErrorKind};

use crate::error::ApiError;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
        .layer(build_cors_layer(&server.cors))
        .layer(build_compression_layer())
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(Duration::from_secs(server.request_timeout_seconds))
        .layer(DefaultBodyLimit::max(server.max_body_bytes));

    build_router(state).layer(middleware)
}

/// Turns errors raised by tower middleware into the standard error body.
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        return AppError::new(ErrorKind::Timeout, "The request took too long to complete").into();
    }
    AppError::internal(format!("Unhandled middleware error: {err}")).into()
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.server.bind_address();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "Franchise server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Franchise server shut down gracefully");
    Ok(())
}
