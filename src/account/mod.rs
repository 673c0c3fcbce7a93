//! User account module
//!
//! SQLite-backed storage for user records (id, name, username, balance).

pub mod models;
pub mod repository;

// Re-export commonly used types
pub use models::{User, UserSummary};
pub use repository::UserRepository;

// Re-export Database from top-level db module
pub use crate::db::Database;
