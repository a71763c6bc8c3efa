//! Welcome route

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Welcome message returned by `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the Open Weather Map API!";

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
