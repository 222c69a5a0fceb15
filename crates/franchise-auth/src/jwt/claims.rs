//! JWT claims structure shared by access and refresh tokens.

use serde::{Deserialize, Serialize};

use franchise_core::types::UserId;
use franchise_entity::user::{User, UserRole};

/// JWT claims payload. Access and refresh tokens carry the same identity
/// and differ only in `exp` and `token_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: UserId,
    /// User email at issuance.
    pub email: String,
    /// User role at issuance.
    pub role: UserRole,
    /// Tenant the user belongs to.
    pub tenant_id: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token purpose.
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token presented on API requests.
    Access,
    /// Long-lived token exchanged for a new pair.
    Refresh,
}

/// The identity a token pair is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    /// User ID.
    pub user_id: UserId,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Tenant.
    pub tenant_id: String,
}

impl From<&User> for TokenSubject {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            tenant_id: user.tenant_id.clone(),
        }
    }
}

impl Claims {
    /// Returns the identity carried by these claims.
    pub fn subject(&self) -> TokenSubject {
        TokenSubject {
            user_id: self.sub,
            email: self.email.clone(),
            role: self.role,
            tenant_id: self.tenant_id.clone(),
        }
    }
}
