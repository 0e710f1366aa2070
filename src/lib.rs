//! REST API backend for a relational store of board-game reviews.
//!
//! The crate exposes list/detail/create/update/delete endpoints for reviews,
//! comments, categories, and users, with filtering, sorting, and pagination on
//! the list endpoints. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input parsing, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, DTOs, and operation-specific parameter types
//! - **Query Layer** (`query/`) - Query-parameter normalization and the pagination engine
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses path and body input, calls service
//! 3. **Service** normalizes query parameters, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** applies pagination and returns domain models to controller
//! 6. **Controller** converts domain models to DTOs, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
