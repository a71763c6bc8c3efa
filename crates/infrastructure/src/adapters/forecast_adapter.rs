//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::{DailySeries, ForecastPort, HourlySeries, RawForecastPayload};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_weather::{
    ForecastClient, ForecastResponse, OpenMeteoClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument, warn};

/// Adapter for forecast lookups against the Open-Meteo API
pub struct ForecastAdapter {
    client: Box<dyn ForecastClient>,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"ForecastClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn with_client(client: Box<dyn ForecastClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: &WeatherError) -> ApplicationError {
        if err.is_upstream_failure() {
            ApplicationError::UpstreamUnavailable(format!(
                "Failed to connect to Open-Meteo API: {err}"
            ))
        } else {
            ApplicationError::data_mapping(err)
        }
    }

    /// Convert the wire response into port series
    fn to_payload(response: ForecastResponse) -> RawForecastPayload {
        RawForecastPayload {
            hourly: HourlySeries {
                time: response.hourly.time,
                temperature_2m: response.hourly.temperature_2m,
                relative_humidity_2m: response.hourly.relative_humidity_2m,
            },
            daily: DailySeries {
                time: response.daily.time,
                temperature_max: response.daily.temperature_2m_max,
                temperature_min: response.daily.temperature_2m_min,
                precipitation_probability: response.daily.precipitation_probability_max,
            },
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<RawForecastPayload, ApplicationError> {
        let response = self
            .client
            .fetch_forecast(location.latitude(), location.longitude())
            .await
            .map_err(|e| {
                warn!(error = %e, upstream = e.is_upstream_failure(), "Forecast request failed");
                Self::map_error(&e)
            })?;

        // Hourly samples are in this offset's local time; the service indexes by UTC hour
        debug!(
            days = response.daily.time.len(),
            hours = response.hourly.temperature_2m.len(),
            utc_offset_seconds = response.utc_offset_seconds,
            "Received forecast payload"
        );
        Ok(Self::to_payload(response))
    }
}
