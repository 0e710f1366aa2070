//! HTTP request handlers.
//!
//! Controllers parse path, query, and body input, delegate to the service
//! layer, and convert domain models to DTOs. Each handler carries its OpenAPI
//! path annotation.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
