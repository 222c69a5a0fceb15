//! User entity model.

use chrono::{DateTime, Utc};
use franchise_core::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered user belonging to one tenant (franchise network).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email, unique ignoring case.
    pub email: String,
    /// Argon2 password hash. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// Tenant (franchise network) this user belongs to.
    pub tenant_id: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user belongs to the given tenant.
    pub fn belongs_to(&self, tenant_id: &str) -> bool {
        self.tenant_id == tenant_id
    }

    /// Apply a partial profile update. Absent or empty fields are left untouched.
    ///
    /// Returns `true` if any field changed.
    pub fn apply_profile(&mut self, update: &UpdateUser, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut self.first_name, &update.first_name),
            (&mut self.last_name, &update.last_name),
            (&mut self.phone, &update.phone),
            (&mut self.avatar, &update.avatar),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                if slot.as_deref() != Some(value) {
                    *slot = Some(value.to_string());
                    changed = true;
                }
            }
        }
        if changed {
            self.updated_at = now;
        }
        changed
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Owning tenant.
    pub tenant_id: String,
    /// Given name (optional).
    pub first_name: Option<String>,
    /// Family name (optional).
    pub last_name: Option<String>,
    /// Phone number (optional).
    pub phone: Option<String>,
}

impl CreateUser {
    /// Materialize a full user record with a fresh id.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: UserId::new(),
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            tenant_id: self.tenant_id,
            first_name: self.first_name.filter(|v| !v.is_empty()),
            last_name: self.last_name.filter(|v| !v.is_empty()),
            phone: self.phone.filter(|v| !v.is_empty()),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        CreateUser {
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::Dealer,
            tenant_id: "t1".to_string(),
            first_name: Some("Ann".to_string()),
            last_name: None,
            phone: Some(String::new()),
        }
        .into_user(Utc::now())
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "dealer");
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn test_empty_create_fields_become_none() {
        assert_eq!(sample_user().phone, None);
    }

    #[test]
    fn test_partial_update_keeps_omitted_fields() {
        let mut user = sample_user();
        let changed = user.apply_profile(
            &UpdateUser {
                phone: Some("555-0100".to_string()),
                last_name: Some(String::new()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert!(changed);
        assert_eq!(user.first_name.as_deref(), Some("Ann"));
        assert_eq!(user.last_name, None);
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_noop_update_keeps_timestamp() {
        let mut user = sample_user();
        let before = user.updated_at;
        assert!(!user.apply_profile(&UpdateUser::default(), Utc::now()));
        assert_eq!(user.updated_at, before);
    }
}
