//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The upstream forecast service could not be reached or refused the request
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// The upstream payload did not have the expected shape
    #[error("{0}")]
    DataMapping(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Build a data mapping error from a description of the offending field
    pub fn data_mapping(detail: impl std::fmt::Display) -> Self {
        Self::DataMapping(format!("Error in data mapping: {detail}"))
    }

    /// Whether the failure originated in the upstream service
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}
