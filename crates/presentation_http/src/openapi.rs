//! OpenAPI documentation module
//!
//! Provides the OpenAPI 3 document for the weather API, served through
//! Swagger UI and ReDoc outside production.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Router, response::Html, routing::get};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::ErrorResponse, handlers, state::AppState};

/// Path of the raw OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// OpenAPI documentation for the weather API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Open Weather Map API",
        version = "1.0.0",
        description = "Una API para obtener el pronóstico del tiempo para Colombia usando Open-Meteo."
    ),
    tags(
        (name = "general", description = "Welcome route"),
        (name = "health", description = "Liveness check"),
        (name = "weather", description = "7-day weather forecast")
    ),
    paths(
        handlers::root::root,
        handlers::health::health_check,
        handlers::weather::get_weather,
    ),
    components(schemas(
        handlers::root::MessageResponse,
        handlers::health::HealthResponse,
        handlers::weather::WeatherResponse,
        handlers::weather::DailyForecastResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/openapi.json` - OpenAPI specification
/// - `/docs` - Swagger UI interactive documentation
/// - `/redoc` - ReDoc documentation
pub fn create_openapi_routes() -> Router<AppState> {
    let redoc = Redoc::with_url(OPENAPI_JSON_PATH, ApiDoc::openapi());

    Router::new()
        .route("/redoc", get(|| async move { Html(redoc.to_html()) }))
        // Swagger UI also serves the document at OPENAPI_JSON_PATH
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
