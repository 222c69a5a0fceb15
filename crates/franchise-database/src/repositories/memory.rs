//! In-process stores backed by `DashMap`.
//!
//! Used by the `memory` backend and by tests. They enforce the same
//! uniqueness and ownership rules as the PostgreSQL repositories.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use franchise_core::error::AppError;
use franchise_core::result::AppResult;
use franchise_core::types::{ChecklistId, PageRequest, PageResponse, UserId};
use franchise_entity::checklist::Checklist;
use franchise_entity::user::{CreateUser, User, UserRole};

use crate::store::{ChecklistStore, UserStore};

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<UserId, User>,
    /// Lowercased email to user id.
    emails: DashMap<String, UserId>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|r| *r.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        let user = data.into_user(Utc::now());
        match self.emails.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "A user with email '{}' already exists",
                user.email
            ))
            .titled("User already exists")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                debug!(user_id = %user.id, "Stored user in memory");
                Ok(user)
            }
        }
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut entry = self
            .users
            .get_mut(&user.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))?;
        let stored = entry.value_mut();
        stored.first_name = user.first_name.clone();
        stored.last_name = user.last_name.clone();
        stored.phone = user.phone.clone();
        stored.avatar = user.avatar.clone();
        stored.updated_at = user.updated_at;
        Ok(stored.clone())
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<()> {
        let mut entry = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        let stored = entry.value_mut();
        stored.password_hash = password_hash.to_string();
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn list_by_tenant_and_role(
        &self,
        tenant_id: &str,
        role: UserRole,
    ) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|r| r.tenant_id == tenant_id && r.role == role)
            .map(|r| r.value().clone())
            .collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}

/// In-memory checklist store.
#[derive(Debug, Default)]
pub struct MemoryChecklistStore {
    checklists: DashMap<ChecklistId, Checklist>,
}

impl MemoryChecklistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChecklistStore for MemoryChecklistStore {
    async fn find_by_id(&self, id: ChecklistId, user_id: UserId) -> AppResult<Option<Checklist>> {
        Ok(self
            .checklists
            .get(&id)
            .filter(|r| r.user_id == user_id)
            .map(|r| r.value().clone()))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Checklist>> {
        let mut owned: Vec<Checklist> = self
            .checklists
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page, total))
    }

    async fn create(&self, checklist: &Checklist) -> AppResult<Checklist> {
        self.checklists.insert(checklist.id, checklist.clone());
        debug!(checklist_id = %checklist.id, "Stored checklist in memory");
        Ok(checklist.clone())
    }

    async fn update(&self, checklist: &Checklist) -> AppResult<Checklist> {
        match self.checklists.get_mut(&checklist.id) {
            Some(mut entry) if entry.user_id == checklist.user_id => {
                *entry.value_mut() = checklist.clone();
                Ok(checklist.clone())
            }
            _ => Err(
                AppError::not_found(format!("Checklist {} not found", checklist.id))
                    .titled("Checklist not found"),
            ),
        }
    }

    async fn delete(&self, id: ChecklistId, user_id: UserId) -> AppResult<bool> {
        Ok(self
            .checklists
            .remove_if(&id, |_, c| c.user_id == user_id)
            .is_some())
    }
}
