//! Authentication use cases: register, login, refresh, logout.

use std::sync::Arc;

use tracing::{info, warn};

use franchise_auth::jwt::{TokenPair, TokenService, TokenSubject};
use franchise_auth::password::{PasswordHasher, PasswordValidator};
use franchise_core::error::AppError;
use franchise_database::UserStore;
use franchise_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Title used for every failed login, whatever the cause.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registration data accepted from a client.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Login email.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
    /// Tenant to join.
    pub tenant_id: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// A user together with a freshly issued token pair.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Access and refresh tokens.
    pub tokens: TokenPair,
}

/// Handles registration and credential exchange.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: Arc<TokenService>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
            validator,
        }
    }

    /// Register a new user and sign them in.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AppError> {
        self.validator.validate(&input.password)?;

        let email = input.email.trim().to_string();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(
                AppError::conflict(format!("A user with email '{email}' already exists"))
                    .titled("User already exists"),
            );
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(CreateUser {
                email,
                password_hash,
                role: input.role,
                tenant_id: input.tenant_id,
                first_name: input.first_name,
                last_name: input.last_name,
                phone: input.phone,
            })
            .await?;

        let tokens = self.tokens.issue(&TokenSubject::from(&user))?;

        info!(
            user_id = %user.id,
            tenant_id = %user.tenant_id,
            role = %user.role,
            "User registered"
        );

        Ok(AuthSession { user, tokens })
    }

    /// Exchange email and password for a token pair.
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            warn!("Login attempt for unknown email");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        let tokens = self.tokens.issue(&TokenSubject::from(&user))?;
        info!(user_id = %user.id, tenant_id = %user.tenant_id, "User logged in");

        Ok(AuthSession { user, tokens })
    }

    /// Issue a new pair from a refresh token.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        self.tokens.refresh(refresh_token)
    }

    /// Record a logout. Tokens are not revoked; they expire on their own.
    pub fn logout(&self, ctx: &RequestContext) {
        info!(user_id = %ctx.user_id, "User logged out");
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid email or password").titled(INVALID_CREDENTIALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_core::config::AuthConfig;
    use franchise_core::error::ErrorKind;
    use franchise_database::repositories::MemoryUserStore;

    fn service() -> AuthService {
        let config = AuthConfig::default();
        AuthService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(TokenService::new(&config)),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
        )
    }

    fn registration(email: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: "12345678".to_string(),
            role: UserRole::Dealer,
            tenant_id: "t1".to_string(),
            first_name: Some("Dee".to_string()),
            last_name: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_duplicate_conflicts() {
        let auth = service();
        let session = auth.register(registration("a@x.com")).await.unwrap();
        assert_eq!(session.user.role, UserRole::Dealer);
        assert_ne!(session.user.password_hash, "12345678");

        let err = auth.register(registration("a@x.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.title(), "User already exists");
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let auth = service();
        let mut input = registration("short@x.com");
        input.password = "1234567".to_string();
        let err = auth.register(input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let auth = service();
        auth.register(registration("a@x.com")).await.unwrap();

        let session = auth.login("a@x.com", "12345678").await.unwrap();
        assert_eq!(session.user.email, "a@x.com");

        let err = auth.login("a@x.com", "wrong-pass").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.title(), "Invalid credentials");

        let err = auth.login("nobody@x.com", "12345678").await.unwrap_err();
        assert_eq!(err.title(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_refresh_issues_new_pair() {
        let auth = service();
        let session = auth.register(registration("a@x.com")).await.unwrap();
        let pair = auth.refresh(&session.tokens.refresh_token).unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(auth.refresh("garbage").is_err());
    }
}
