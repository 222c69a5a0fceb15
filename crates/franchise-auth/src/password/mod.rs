//! Argon2 password hashing and the length policy for new passwords.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::PasswordValidator;
