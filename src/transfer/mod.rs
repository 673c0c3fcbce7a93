//! Balance transfer module
//!
//! The one piece of logic with an invariant to protect: moving an amount
//! between two users must conserve their combined balance, so both row
//! updates run inside a single transaction.

pub mod error;
pub mod service;

pub use error::TransferError;
pub use service::TransferService;
