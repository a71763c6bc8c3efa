//! Forecast provider port
//!
//! Defines the interface for retrieving raw forecast series for a location.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Hourly readings, index-aligned by hour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// ISO-8601 local timestamps; may be empty if the provider omitted them
    pub time: Vec<String>,
    /// Air temperature at 2 m in Celsius
    pub temperature_2m: Vec<Option<f64>>,
    /// Relative humidity at 2 m in percent
    pub relative_humidity_2m: Vec<Option<u8>>,
}

/// Daily aggregates, index-aligned by day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Dates as `YYYY-MM-DD`
    pub time: Vec<String>,
    pub temperature_max: Vec<Option<f64>>,
    pub temperature_min: Vec<Option<f64>>,
    /// Maximum precipitation probability in percent
    pub precipitation_probability: Vec<Option<u8>>,
}

/// Decoded provider payload, before mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecastPayload {
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// Port for forecast providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the hourly and daily series for a location
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UpstreamUnavailable` when the provider cannot
    /// be reached or rejects the request, and `ApplicationError::DataMapping`
    /// when its response does not decode into the expected series.
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<RawForecastPayload, ApplicationError>;
}
