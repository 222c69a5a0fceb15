//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use franchise_auth::jwt::TokenService;
use franchise_auth::password::{PasswordHasher, PasswordValidator};
use franchise_auth::rbac::RbacEnforcer;
use franchise_core::config::AppConfig;
use franchise_database::{ChecklistStore, UserStore};
use franchise_service::{AuthService, ChecklistService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: DateTime<Utc>,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuance and validation
    pub tokens: Arc<TokenService>,
    /// Role-based access control enforcer
    pub rbac: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, refresh
    pub auth_service: Arc<AuthService>,
    /// Profiles and dealer directory
    pub user_service: Arc<UserService>,
    /// Checklist lifecycle
    pub checklist_service: Arc<ChecklistService>,
}

impl AppState {
    /// Wire the services on top of the given stores.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        checklists: Arc<dyn ChecklistStore>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let rbac = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            Arc::clone(&hasher),
            Arc::clone(&validator),
        ));
        let user_service = Arc::new(UserService::new(
            users,
            hasher,
            validator,
            Arc::clone(&rbac),
        ));
        let checklist_service = Arc::new(ChecklistService::new(checklists, Arc::clone(&rbac)));

        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
            tokens,
            rbac,
            auth_service,
            user_service,
            checklist_service,
        }
    }
}
