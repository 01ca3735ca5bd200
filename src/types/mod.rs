//! Shared types - Response wrappers used across the API surface.

pub mod response;

pub use response::{ApiResponse, Created, NoContent};
