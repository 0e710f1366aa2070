//! Factories for creating test entities with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with the required foreign
//! keys, override fields as needed, then `build()` to insert the entity.

pub mod category;
pub mod comment;
pub mod helpers;
pub mod review;
pub mod user;
