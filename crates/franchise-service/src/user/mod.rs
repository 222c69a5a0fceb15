//! User profile and dealer directory services.

pub mod service;

pub use service::UserService;
