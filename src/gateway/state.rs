use std::sync::Arc;

use crate::account::Database;

/// Shared gateway application state
///
/// The store is constructed once at startup and handed to the router;
/// there is no global singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
