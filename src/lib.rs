//! CuciKilat API - Laundry platform backend
//!
//! Clean architecture REST API built with Axum and SeaORM: customers place
//! laundry orders, pay through a mock gateway, and follow a status timeline;
//! partners run outlet catalogs; admins drive the partner approval workflow.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, webhooks)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (response wrappers)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Order, OrderStatus, Password, User, UserRole};
pub use errors::{AppError, AppResult};
