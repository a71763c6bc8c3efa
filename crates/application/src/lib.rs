//! Application layer - Use cases and orchestration
//!
//! Holds the forecast port, the pure forecast mapper, and the service that
//! ties them together. Infrastructure adapters implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
