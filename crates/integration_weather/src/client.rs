//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo Forecast API. One GET per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ForecastResponse;

/// Hourly series requested from Open-Meteo
pub const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m";

/// Daily series requested from Open-Meteo
pub const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built or the connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Response body is not JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Response is JSON but does not have the expected forecast shape
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl WeatherError {
    /// Whether the failure happened before a usable payload was received.
    ///
    /// `false` only for `UnexpectedShape`, which is a data problem.
    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        !matches!(self, Self::UnexpectedShape(_))
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Forecast client trait
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the hourly and daily forecast series for a location
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Forecast endpoint URL
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Fixed query parameters for a forecast request
    fn forecast_params(latitude: f64, longitude: f64) -> [(&'static str, String); 6] {
        [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("temperature_unit", "celsius".to_string()),
        ]
    }

    /// Classify a transport-level failure
    fn map_send_error(err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout(err.to_string())
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Decode a response body: first as JSON, then into the forecast shape
    fn decode_body(body: &[u8]) -> Result<ForecastResponse, WeatherError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| WeatherError::InvalidBody(e.to_string()))?;

        serde_json::from_value(value).map_err(|e| WeatherError::UnexpectedShape(e.to_string()))
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&Self::forecast_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let forecast = Self::decode_body(&body)?;
        debug!(
            timezone = forecast.timezone.as_deref().unwrap_or("unknown"),
            hours = forecast.hourly.temperature_2m.len(),
            days = forecast.daily.time.len(),
            "Received weather forecast"
        );

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"timeout_secs": 3}"#).expect("should deserialize");
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_forecast_url_appends_path() {
        let client = OpenMeteoClient::with_defaults().expect("client creation should succeed");
        assert_eq!(
            client.forecast_url(),
            "https://api.open-meteo.com/v1/forecast"
        );
    }

    #[test]
    fn test_forecast_url_tolerates_trailing_slash() {
        let config = WeatherConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..Default::default()
        };
        let client = OpenMeteoClient::new(config).expect("client creation should succeed");
        assert_eq!(client.forecast_url(), "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn test_forecast_params_are_fixed() {
        let params = OpenMeteoClient::forecast_params(4.6097, -74.0817);
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("latitude"), Some("4.6097"));
        assert_eq!(get("longitude"), Some("-74.0817"));
        assert_eq!(get("hourly"), Some("temperature_2m,relative_humidity_2m"));
        assert_eq!(
            get("daily"),
            Some("temperature_2m_max,temperature_2m_min,precipitation_probability_max")
        );
        assert_eq!(get("timezone"), Some("auto"));
        assert_eq!(get("temperature_unit"), Some("celsius"));
    }

    #[test]
    fn test_decode_body_not_json() {
        let result = OpenMeteoClient::decode_body(b"<html>oops</html>");
        assert!(matches!(result, Err(WeatherError::InvalidBody(_))));
    }

    #[test]
    fn test_decode_body_wrong_shape() {
        let result = OpenMeteoClient::decode_body(br#"{"daily": {}}"#);
        assert!(matches!(result, Err(WeatherError::UnexpectedShape(_))));
    }

    #[test]
    fn test_error_classification() {
        assert!(WeatherError::Timeout("slow".into()).is_upstream_failure());
        assert!(WeatherError::ConnectionFailed("refused".into()).is_upstream_failure());
        assert!(WeatherError::ServiceUnavailable("HTTP 503".into()).is_upstream_failure());
        assert!(WeatherError::RateLimitExceeded.is_upstream_failure());
        assert!(WeatherError::InvalidBody("eof".into()).is_upstream_failure());
        assert!(!WeatherError::UnexpectedShape("missing field".into()).is_upstream_failure());
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::ServiceUnavailable("HTTP 503 Service Unavailable".into());
        assert_eq!(
            err.to_string(),
            "Service unavailable: HTTP 503 Service Unavailable"
        );

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenMeteoClient::with_defaults().is_ok());
    }
}
