//! Domain layer for the weather forecast API
//!
//! Contains the forecast records, the location value object, and domain errors.
//! This layer performs no I/O and defines the vocabulary shared by the other crates.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
