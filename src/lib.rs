//! Ledgerd - Minimal Ledger API
//!
//! User records (name, username, integer balance) with a balance-transfer
//! operation between two users, served over HTTP.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - Rolling-file tracing setup
//! - [`db`] - SQLite connection pool and schema management
//! - [`account`] - User records and repository
//! - [`transfer`] - The transfer operation and its invariant
//! - [`gateway`] - HTTP API layer (axum)

pub mod config;
pub mod db;
pub mod logging;

pub mod account;
pub mod gateway;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{User, UserRepository, UserSummary};
pub use db::Database;
pub use transfer::{TransferError, TransferService};
