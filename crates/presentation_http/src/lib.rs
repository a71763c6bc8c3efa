//! Weather API HTTP presentation layer
//!
//! This crate provides the HTTP surface: the forecast endpoint, liveness and
//! welcome routes, and the optional API documentation.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedQuery, ValidationError};
pub use routes::{create_app, create_router};
pub use server::serve_with_drain_timeout;
pub use state::AppState;
