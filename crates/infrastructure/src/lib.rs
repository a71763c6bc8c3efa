//! Infrastructure layer - Adapters for external systems
//!
//! Implements the forecast port over the Open-Meteo client and owns process
//! configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::ForecastAdapter;
pub use config::{AppConfig, Environment, ServerConfig};
pub use integration_weather::WeatherConfig;
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_logging};
