//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use franchise_auth::TokenPair;
use franchise_core::types::{ChecklistId, UserId};
use franchise_entity::checklist::{Checklist, ChecklistStatus, Task};
use franchise_entity::user::{User, UserRole};
use franchise_service::AuthSession;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Tenant.
    pub tenant_id: String,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone.
    pub phone: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Created.
    pub created_at: DateTime<Utc>,
    /// Last modified.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            tenant_id: user.tenant_id,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// Access token.
    pub token: String,
    /// Refresh token.
    pub refresh_token: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user.into(),
            token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
        }
    }
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// New access token.
    pub token: String,
    /// New refresh token.
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

/// Checklist with its tasks and derived progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistResponse {
    /// Checklist ID.
    pub id: ChecklistId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Owner.
    pub user_id: UserId,
    /// Owner's tenant.
    pub tenant_id: String,
    /// Derived status.
    pub status: ChecklistStatus,
    /// Tasks ordered by position.
    pub tasks: Vec<Task>,
    /// Completion percentage.
    pub kpi_score: f64,
    /// Created.
    pub created_at: DateTime<Utc>,
    /// Last modified.
    pub updated_at: DateTime<Utc>,
}

impl From<Checklist> for ChecklistResponse {
    fn from(c: Checklist) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            user_id: c.user_id,
            tenant_id: c.tenant_id,
            status: c.status,
            tasks: c.tasks,
            kpi_score: c.kpi_score,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Version.
    pub version: String,
    /// Server time.
    pub timestamp: DateTime<Utc>,
    /// Seconds since startup.
    pub uptime_seconds: i64,
}
