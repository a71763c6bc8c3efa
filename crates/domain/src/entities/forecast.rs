//! Forecast request and report records
//!
//! All records here are request-scoped and immutable once built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Caller input for a forecast lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastQuery {
    location: GeoLocation,
    city: Option<String>,
}

impl ForecastQuery {
    /// Create a query for a location with an optional place name
    #[must_use]
    pub const fn new(location: GeoLocation, city: Option<String>) -> Self {
        Self { location, city }
    }

    /// The requested location
    #[must_use]
    pub const fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// The caller-supplied place name, if any
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Label shown to the caller: the city when non-empty, else the coordinates
    #[must_use]
    pub fn location_label(&self) -> String {
        match self.city() {
            Some(city) if !city.is_empty() => city.to_string(),
            _ => self.location.label(),
        }
    }

    /// Informational message for the report built from this query
    #[must_use]
    pub fn info_message(&self) -> String {
        WeatherReport::info_message_for(&self.location_label())
    }
}

/// Forecast for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Forecast date in the location's timezone
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Maximum precipitation probability for the day (0-100)
    pub precipitation_probability: u8,
}

/// Simplified forecast returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name or coordinate label
    pub location_label: String,
    /// Requested latitude
    pub latitude: f64,
    /// Requested longitude
    pub longitude: f64,
    /// Temperature at the current hour in Celsius
    pub current_temperature: Option<f64>,
    /// Relative humidity at the current hour in percent
    pub current_humidity: Option<u8>,
    /// Daily forecasts in upstream order
    pub daily_forecasts: Vec<DailyForecastEntry>,
    /// Informational message describing the report
    pub info_message: String,
}

impl WeatherReport {
    /// Informational message for a location label
    #[must_use]
    pub fn info_message_for(location_label: &str) -> String {
        format!("7-day weather forecast for {location_label}.")
    }
}
