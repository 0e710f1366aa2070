//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. `DatabaseConnection` is a
//! connection pool, so clones share the pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
