//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// There is no hierarchy: a restricted route names exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    /// Owner of the franchise network; sees every dealer of the tenant.
    #[serde(rename = "franchise-owner", alias = "franchiser")]
    #[sqlx(rename = "franchise-owner")]
    FranchiseOwner,
    /// Dealer operating within a franchise network.
    #[serde(rename = "dealer")]
    #[sqlx(rename = "dealer")]
    Dealer,
    /// Manager working for a dealer.
    #[serde(rename = "manager")]
    #[sqlx(rename = "manager")]
    Manager,
}

impl UserRole {
    /// All roles, in declaration order.
    pub const ALL: [UserRole; 3] = [Self::FranchiseOwner, Self::Dealer, Self::Manager];

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FranchiseOwner => "franchise-owner",
            Self::Dealer => "dealer",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = franchise_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "franchise-owner" | "franchiser" => Ok(Self::FranchiseOwner),
            "dealer" => Ok(Self::Dealer),
            "manager" => Ok(Self::Manager),
            _ => Err(franchise_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: franchise-owner, dealer, manager"
            ))),
        }
    }
}
