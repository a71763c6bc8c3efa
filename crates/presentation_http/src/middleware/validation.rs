//! Request validation
//!
//! Provides a `ValidatedQuery` extractor that deserializes the query string
//! and validates it using the validator crate.

use axum::{
    Json,
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;
use validator::Validate;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid query parameters: {0}")]
    QueryError(#[from] QueryRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::QueryError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };
        warn!(error = %message, "Rejected request parameters");

        let body = serde_json::json!({
            "message": message,
            "code": "validation_error"
        });

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// A query-string extractor that also validates the parameters
///
/// Missing, malformed, or out-of-range parameters are rejected with
/// `422 Unprocessable Entity` before the handler runs.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Params {
///     #[validate(range(min = -90.0, max = 90.0))]
///     latitude: f64,
/// }
///
/// async fn handler(ValidatedQuery(params): ValidatedQuery<Params>) {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        value.validate().map_err(|e| {
            let mut errors: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error
                                .message
                                .as_ref()
                                .map_or_else(|| error.code.to_string(), ToString::to_string)
                        )
                    })
                })
                .collect();
            errors.sort();

            ValidationError::ValidationFailed(errors.join("; "))
        })?;

        Ok(Self(value))
    }
}
