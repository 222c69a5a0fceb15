//! Route definitions for the franchise HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// API version prefix.
pub const API_PREFIX: &str = "/api/v1";

/// Build the Axum router with every route, without the outer middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(dealer_routes(state.clone()))
        .merge(checklist_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest(API_PREFIX, api_routes)
        .route("/health", get(handlers::health::health))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Auth endpoints: register, login, logout, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/profile",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
        .route(
            "/users/profile/password",
            put(handlers::user::change_password),
        )
}

/// Dealer directory, franchise owners only
fn dealer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dealers", get(handlers::dealer::list_dealers))
        .route("/dealers/{id}", get(handlers::dealer::get_dealer))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::rbac::require_franchise_owner,
        ))
}

/// Checklist CRUD and completion
fn checklist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/checklists",
            get(handlers::checklist::list_checklists).post(handlers::checklist::create_checklist),
        )
        .route(
            "/checklists/{id}",
            get(handlers::checklist::get_checklist)
                .put(handlers::checklist::update_checklist)
                .delete(handlers::checklist::delete_checklist),
        )
        .route(
            "/checklists/{id}/complete",
            post(handlers::checklist::complete_checklist),
        )
}
