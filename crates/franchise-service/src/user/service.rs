//! User self-service operations and the tenant dealer directory.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use franchise_auth::password::{PasswordHasher, PasswordValidator};
use franchise_auth::rbac::{Permission, RbacEnforcer};
use franchise_core::error::AppError;
use franchise_core::types::UserId;
use franchise_database::UserStore;
use franchise_entity::user::{UpdateUser, User, UserRole};

use crate::context::RequestContext;

/// Handles profile reads and writes, password changes, and dealer listing.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    rbac: Arc<RbacEnforcer>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            rbac,
        }
    }

    /// Gets the current user's full record.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found").titled("User not found"))
    }

    /// Merge non-empty profile fields into the current user.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: UpdateUser,
    ) -> Result<User, AppError> {
        let mut user = self.get_profile(ctx).await?;

        if !user.apply_profile(&update, Utc::now()) {
            debug!(user_id = %ctx.user_id, "Profile update changed nothing");
            return Ok(user);
        }

        let user = self.users.update(&user).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Changes the current user's password after verifying the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_profile(ctx).await?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::authentication("Current password is incorrect")
                .titled("Invalid credentials"));
        }

        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.users.update_password(ctx.user_id, &new_hash).await?;

        info!(user_id = %ctx.user_id, "Password changed");
        Ok(())
    }

    /// List users of the caller's tenant with `role` (dealers by default).
    pub async fn list_dealers(
        &self,
        ctx: &RequestContext,
        role: Option<UserRole>,
    ) -> Result<Vec<User>, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ViewAllDealers)?;

        let role = role.unwrap_or(UserRole::Dealer);
        let users = self
            .users
            .list_by_tenant_and_role(&ctx.tenant_id, role)
            .await?;

        debug!(
            tenant_id = %ctx.tenant_id,
            role = %role,
            count = users.len(),
            "Listed tenant users"
        );
        Ok(users)
    }

    /// Fetch one dealer of the caller's tenant.
    ///
    /// Users of another tenant or with another role are reported as absent.
    pub async fn get_dealer(&self, ctx: &RequestContext, id: UserId) -> Result<User, AppError> {
        self.rbac
            .require_permission(ctx.role, Permission::ViewAllDealers)?;

        self.users
            .find_by_id(id)
            .await?
            .filter(|u| u.belongs_to(&ctx.tenant_id) && u.role == UserRole::Dealer)
            .ok_or_else(|| {
                AppError::not_found(format!("Dealer {id} not found")).titled("Dealer not found")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_core::config::AuthConfig;
    use franchise_core::error::ErrorKind;
    use franchise_database::repositories::MemoryUserStore;
    use franchise_entity::user::CreateUser;

    struct Fixture {
        service: UserService,
        store: Arc<MemoryUserStore>,
        hasher: Arc<PasswordHasher>,
    }

    fn fixture() -> Fixture {
        let config = AuthConfig::default();
        let store = Arc::new(MemoryUserStore::new());
        let hasher = Arc::new(PasswordHasher::new());
        let service = UserService::new(
            store.clone(),
            hasher.clone(),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(RbacEnforcer::new()),
        );
        Fixture {
            service,
            store,
            hasher,
        }
    }

    async fn seed(f: &Fixture, email: &str, role: UserRole, tenant: &str) -> User {
        f.store
            .create(CreateUser {
                email: email.to_string(),
                password_hash: f.hasher.hash_password("12345678").unwrap(),
                role,
                tenant_id: tenant.to_string(),
                first_name: Some("First".to_string()),
                last_name: Some("Last".to_string()),
                phone: None,
            })
            .await
            .unwrap()
    }

    fn ctx_for(user: &User) -> RequestContext {
        RequestContext::new(user.id, user.email.clone(), user.role, user.tenant_id.clone())
    }

    #[tokio::test]
    async fn test_update_profile_keeps_omitted_fields() {
        let f = fixture();
        let user = seed(&f, "a@x.com", UserRole::Dealer, "t1").await;

        let updated = f
            .service
            .update_profile(
                &ctx_for(&user),
                UpdateUser {
                    phone: Some("555-0100".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name.as_deref(), Some("First"));
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn test_change_password() {
        let f = fixture();
        let user = seed(&f, "a@x.com", UserRole::Manager, "t1").await;
        let ctx = ctx_for(&user);

        let err = f
            .service
            .change_password(&ctx, "wrong-pass", "abcdefgh")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        f.service
            .change_password(&ctx, "12345678", "abcdefgh")
            .await
            .unwrap();
        let stored = f.store.find_by_id(user.id).await.unwrap().unwrap();
        assert!(f.hasher.verify_password("abcdefgh", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_dealers_are_tenant_scoped() {
        let f = fixture();
        let owner = seed(&f, "owner@a.com", UserRole::FranchiseOwner, "tenant-a").await;
        let dealer_a = seed(&f, "dealer@a.com", UserRole::Dealer, "tenant-a").await;
        let dealer_b = seed(&f, "dealer@b.com", UserRole::Dealer, "tenant-b").await;
        let ctx = ctx_for(&owner);

        let dealers = f.service.list_dealers(&ctx, None).await.unwrap();
        assert_eq!(dealers.len(), 1);
        assert_eq!(dealers[0].id, dealer_a.id);

        assert!(f.service.get_dealer(&ctx, dealer_a.id).await.is_ok());
        let err = f.service.get_dealer(&ctx, dealer_b.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = f.service.get_dealer(&ctx, owner.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_dealer_listing_needs_permission() {
        let f = fixture();
        let dealer = seed(&f, "dealer@a.com", UserRole::Dealer, "tenant-a").await;
        let err = f
            .service
            .list_dealers(&ctx_for(&dealer), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
