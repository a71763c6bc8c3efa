//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - optional `config.toml` (or any format the `config` crate recognizes) in
//!   the working directory
//! - `WEATHER_API_*` environment variables, `__` separating nested keys
//!   (e.g. `WEATHER_API_WEATHER__BASE_URL`)
//! - the bare `ENVIRONMENT` variable, which overrides `environment`

mod server;

use std::collections::HashMap;
use std::fmt;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use server::ServerConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "WEATHER_API";

/// Unprefixed variable selecting the environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Environment {
    /// Development environment - API docs exposed
    #[default]
    Development,
    /// Production environment - API docs hidden
    Production,
}

impl Environment {
    /// Whether the interactive API documentation routes are mounted
    #[must_use]
    pub const fn docs_enabled(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo client configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(std::env::vars().collect())
    }

    /// Load configuration reading environment overrides from `vars`
    /// instead of the process environment
    pub fn load_from(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        let environment = vars.get(ENVIRONMENT_VAR).cloned();

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., WEATHER_API_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("environment", environment)?;

        builder.build()?.try_deserialize()
    }
}
