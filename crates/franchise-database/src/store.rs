//! Store traits for the user directory and checklist persistence.
//!
//! Each operation is atomic at the single-entity level. Implementations
//! exist for PostgreSQL and for an in-process map.

use async_trait::async_trait;

use franchise_core::result::AppResult;
use franchise_core::types::{ChecklistId, PageRequest, PageResponse, UserId};
use franchise_entity::checklist::Checklist;
use franchise_entity::user::{CreateUser, User, UserRole};

/// Persistence for user records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a user. Fails with a conflict if the email is taken.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Persist the profile fields of an existing user.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Replace a user's password hash.
    async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<()>;

    /// List users of a tenant with the given role, oldest first.
    async fn list_by_tenant_and_role(&self, tenant_id: &str, role: UserRole)
    -> AppResult<Vec<User>>;
}

/// Persistence for checklists. Every lookup is scoped to the owning user.
#[async_trait]
pub trait ChecklistStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a checklist owned by `user_id`.
    async fn find_by_id(&self, id: ChecklistId, user_id: UserId) -> AppResult<Option<Checklist>>;

    /// List a user's checklists, newest first.
    async fn list_by_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Checklist>>;

    /// Insert a new checklist.
    async fn create(&self, checklist: &Checklist) -> AppResult<Checklist>;

    /// Overwrite an existing checklist. Fails with not-found if it is absent
    /// or owned by someone else.
    async fn update(&self, checklist: &Checklist) -> AppResult<Checklist>;

    /// Delete a checklist. Returns `false` if nothing was deleted.
    async fn delete(&self, id: ChecklistId, user_id: UserId) -> AppResult<bool>;
}
