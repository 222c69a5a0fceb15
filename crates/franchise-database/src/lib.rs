//! # franchise-database
//!
//! Store traits consumed by the service layer, PostgreSQL connection
//! management, and the concrete Postgres and in-memory repositories.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{ChecklistStore, UserStore};
