//! # franchise-auth
//!
//! Token issuance and validation, password hashing, and role-based
//! access control for the franchise backend.
//!
//! ## Modules
//!
//! - `jwt`: HS256 access/refresh tokens carrying identity, role and tenant claims
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `rbac`: exact-role checks and the permission allow-list

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenService, TokenSubject, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
