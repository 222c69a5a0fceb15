//! Permission allow-lists per role.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use franchise_entity::user::UserRole;

/// A coarse permission checked in addition to route-level role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create and edit one's own checklists.
    ManageChecklists,
    /// List every dealer of the tenant.
    ViewAllDealers,
    /// Administer the tenant.
    ManageTenant,
}

impl Permission {
    /// Return the permission as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageChecklists => "manage_checklists",
            Self::ViewAllDealers => "view_all_dealers",
            Self::ManageTenant => "manage_tenant",
        }
    }
}

/// Role → allowed permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<UserRole, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies: HashMap<UserRole, HashSet<Permission>> = HashMap::new();

        for role in UserRole::ALL {
            policies
                .entry(role)
                .or_default()
                .insert(Permission::ManageChecklists);
        }

        let owner = policies.entry(UserRole::FranchiseOwner).or_default();
        owner.insert(Permission::ViewAllDealers);
        owner.insert(Permission::ManageTenant);

        Self { policies }
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
