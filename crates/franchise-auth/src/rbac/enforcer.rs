//! RBAC enforcement: exact role matches and permission checks.

use franchise_core::error::AppError;
use franchise_entity::user::UserRole;

use super::policies::{Permission, RbacPolicies};

/// Enforces role-based access control.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the caller's role to equal `required`. There is no hierarchy.
    pub fn require_role(&self, actual: UserRole, required: UserRole) -> Result<(), AppError> {
        if actual == required {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{actual}' may not access this resource; '{required}' is required"
            )))
        }
    }

    /// Require the caller's role to hold `permission`.
    pub fn require_permission(
        &self,
        role: UserRole,
        permission: Permission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' lacks the '{}' permission",
                permission.as_str()
            )))
        }
    }
}
