//! Request extractors and middleware

mod validation;

pub use validation::{ValidatedQuery, ValidationError};
