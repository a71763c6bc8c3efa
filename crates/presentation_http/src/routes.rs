//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
///
/// Documentation routes are mounted only when the configured environment
/// allows them; otherwise they fall through to 404.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/weather", get(handlers::weather::get_weather));

    if state.config.environment.docs_enabled() {
        router = router.merge(openapi::create_openapi_routes());
    }

    router.with_state(state)
}

/// Create the router wrapped in the request tracing and CORS layers
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);
    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS policy: any origin when none are configured, else the listed ones
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| {
            o.parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
