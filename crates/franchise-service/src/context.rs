//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use franchise_auth::jwt::Claims;
use franchise_core::types::UserId;
use franchise_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from validated token claims by the HTTP layer and passed into
/// service methods so that every operation knows who is acting and in
/// which tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Email from the token.
    pub email: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// Tenant the user belongs to.
    pub tenant_id: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, email: String, role: UserRole, tenant_id: String) -> Self {
        Self {
            user_id,
            email,
            role,
            tenant_id,
            request_time: Utc::now(),
        }
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.email, claims.role, claims.tenant_id)
    }
}
