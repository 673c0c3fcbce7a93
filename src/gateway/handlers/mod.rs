//! Gateway HTTP handlers

pub mod admin;
pub mod health;
pub mod transfer;
pub mod users;
