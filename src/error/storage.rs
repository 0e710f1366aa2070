//! Mapping of storage-level integrity failures to domain errors.
//!
//! SQLite reports foreign-key violations without naming the violated
//! relationship, so the referenced entity is resolved from request context by
//! the calling repository: the one remaining foreign key that can fire on an
//! insert determines the name. The author/owner relationship is reported under
//! its external name `username`.

use sea_orm::{DbErr, SqlErr};

use super::AppError;

/// Translates an insert error into a domain error.
///
/// A foreign-key constraint violation becomes a 404 naming the referenced
/// entity; any other database error propagates unchanged as a 500.
///
/// # Arguments
/// - `err` - The database error returned by the insert
/// - `referenced` - External name of the entity the failed relationship points at
pub fn map_fk_violation(err: DbErr, referenced: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::NotFound(format!("{referenced} not found in database"))
        }
        _ => err.into(),
    }
}
