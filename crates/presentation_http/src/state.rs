//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Forecast lookup use case
    pub forecast_service: Arc<ForecastService>,
    /// Application configuration, loaded once at startup
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state from a service and configuration
    #[must_use]
    pub fn new(forecast_service: ForecastService, config: AppConfig) -> Self {
        Self {
            forecast_service: Arc::new(forecast_service),
            config: Arc::new(config),
        }
    }
}
