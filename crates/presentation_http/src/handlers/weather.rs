//! Weather forecast handler

use axum::{Json, extract::State};
use chrono::NaiveDate;
use domain::{DailyForecastEntry, ForecastQuery, GeoLocation, WeatherReport};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedQuery, state::AppState};

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherQuery {
    /// Latitude in decimal degrees
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    /// Place name shown in the response instead of the coordinates
    #[serde(default)]
    pub city: Option<String>,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyForecastResponse {
    /// Date as `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    #[schema(value_type = String, format = Date, example = "2025-10-14")]
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    #[serde(rename = "temperatura_max")]
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    #[serde(rename = "temperatura_min")]
    pub temperature_min: f64,
    /// Maximum precipitation probability in percent
    #[serde(rename = "probabilidad_precipitacion")]
    pub precipitation_probability: u8,
}

/// Forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    /// City name, or `"{latitude}, {longitude}"` when none was given
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    /// Temperature at the current hour in Celsius
    #[serde(rename = "temperatura_actual")]
    pub current_temperature: Option<f64>,
    /// Relative humidity at the current hour in percent
    #[serde(rename = "humedad_relativa")]
    pub current_humidity: Option<u8>,
    #[serde(rename = "pronostico_proximos_dias")]
    pub daily_forecasts: Vec<DailyForecastResponse>,
    #[serde(rename = "mensaje_info")]
    pub info_message: String,
}

impl From<DailyForecastEntry> for DailyForecastResponse {
    fn from(entry: DailyForecastEntry) -> Self {
        Self {
            date: entry.date,
            temperature_max: entry.temperature_max,
            temperature_min: entry.temperature_min,
            precipitation_probability: entry.precipitation_probability,
        }
    }
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            location: report.location_label,
            latitude: report.latitude,
            longitude: report.longitude,
            current_temperature: report.current_temperature,
            current_humidity: report.current_humidity,
            daily_forecasts: report
                .daily_forecasts
                .into_iter()
                .map(DailyForecastResponse::from)
                .collect(),
            info_message: report.info_message,
        }
    }
}

/// Get the 7-day forecast for a location
#[utoipa::path(
    get,
    path = "/api/v1/weather",
    tag = "weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Forecast for the location", body = WeatherResponse),
        (status = 422, description = "Missing or invalid coordinates", body = crate::error::ErrorResponse),
        (status = 500, description = "Upstream or data processing failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, query), fields(lat = query.latitude, lon = query.longitude))]
pub async fn get_weather(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let location = GeoLocation::new(query.latitude, query.longitude)?;
    let forecast_query = ForecastQuery::new(location, query.city);

    let report = state.forecast_service.get_forecast(&forecast_query).await?;

    info!(
        location = %report.location_label,
        days = report.daily_forecasts.len(),
        "Forecast served"
    );
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> WeatherReport {
        WeatherReport {
            location_label: "Bogota".to_string(),
            latitude: 4.6097,
            longitude: -74.0817,
            current_temperature: Some(15.0),
            current_humidity: None,
            daily_forecasts: vec![DailyForecastEntry {
                date: NaiveDate::from_ymd_opt(2025, 10, 14).unwrap(),
                temperature_max: 20.0,
                temperature_min: 10.0,
                precipitation_probability: 30,
            }],
            info_message: "7-day weather forecast for Bogota.".to_string(),
        }
    }

    #[test]
    fn response_uses_localized_field_names() {
        let response = WeatherResponse::from(sample_report());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ubicacion"], "Bogota");
        assert_eq!(json["latitud"], 4.6097);
        assert_eq!(json["longitud"], -74.0817);
        assert_eq!(json["temperatura_actual"], 15.0);
        assert!(json["humedad_relativa"].is_null());
        assert_eq!(json["mensaje_info"], "7-day weather forecast for Bogota.");
        assert_eq!(
            json["pronostico_proximos_dias"][0],
            serde_json::json!({
                "fecha": "2025-10-14",
                "temperatura_max": 20.0,
                "temperatura_min": 10.0,
                "probabilidad_precipitacion": 30
            })
        );
    }

    #[test]
    fn response_keeps_null_readings() {
        let mut report = sample_report();
        report.current_temperature = None;
        let json = serde_json::to_value(WeatherResponse::from(report)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("temperatura_actual"));
        assert!(obj["temperatura_actual"].is_null());
    }

    #[test]
    fn query_validation_bounds() {
        let ok = WeatherQuery {
            latitude: 90.0,
            longitude: -180.0,
            city: None,
        };
        assert!(ok.validate().is_ok());

        let bad = WeatherQuery {
            latitude: 90.5,
            longitude: 0.0,
            city: None,
        };
        assert!(bad.validate().is_err());
    }
}
