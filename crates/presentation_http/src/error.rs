//! API error handling
//!
//! Maps each application error kind to a fixed HTTP status and a
//! `{"message": ...}` body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream weather API could not be used
    #[error("An error occurred with the external weather API: {0}")]
    ExternalApi(String),

    /// The upstream payload could not be turned into a forecast
    #[error("An error occurred while processing weather data: {0}")]
    DataProcessing(String),

    /// Request parameters were rejected after extraction
    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,
    /// Machine-readable error code, present on validation failures
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ExternalApi(_) | Self::DataProcessing(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let code = match &self {
            Self::ExternalApi(_) => {
                error!(error = %message, "Weather API request failed");
                None
            },
            Self::DataProcessing(_) => {
                error!(error = %message, "Weather data processing failed");
                None
            },
            Self::Internal(_) => {
                error!(error = %message, "Internal error");
                None
            },
            Self::Validation(_) => {
                warn!(error = %message, "Request validation failed");
                Some("validation_error".to_string())
            },
        };

        (status, Json(ErrorResponse { message, code })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::UpstreamUnavailable(msg) => Self::ExternalApi(msg),
            ApplicationError::DataMapping(msg) => Self::DataProcessing(msg),
            ApplicationError::Domain(e) => Self::Validation(e.to_string()),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}
