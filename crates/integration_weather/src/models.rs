//! Open-Meteo wire models
//!
//! Only the series requested by the client are modeled. Individual samples are
//! `Option` because Open-Meteo emits `null` where a value is unavailable.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Timezone resolved by `timezone=auto`
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub utc_offset_seconds: Option<i32>,
    pub hourly: HourlyData,
    pub daily: DailyData,
}

/// Raw hourly series, index-aligned
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    #[serde(default)]
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(deserialize_with = "whole_percentages")]
    pub relative_humidity_2m: Vec<Option<u8>>,
}

/// Raw daily series, index-aligned
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(deserialize_with = "whole_percentages")]
    pub precipitation_probability_max: Vec<Option<u8>>,
}

/// Percent series that accepts `80` and `80.0` alike.
///
/// Fractional or out-of-range samples are rejected.
fn whole_percentages<'de, D>(deserializer: D) -> Result<Vec<Option<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Option<f64>>::deserialize(deserializer)?
        .into_iter()
        .map(|sample| sample.map(to_percentage).transpose().map_err(D::Error::custom))
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percentage(value: f64) -> Result<u8, String> {
    if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(format!("expected a whole-number percentage, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "latitude": 4.625,
            "longitude": -74.125,
            "generationtime_ms": 0.05,
            "utc_offset_seconds": -18000,
            "timezone": "America/Bogota",
            "timezone_abbreviation": "GMT-5",
            "elevation": 2582.0,
            "hourly_units": {"time": "iso8601", "temperature_2m": "°C", "relative_humidity_2m": "%"},
            "hourly": {
                "time": ["2025-10-14T00:00", "2025-10-14T01:00"],
                "temperature_2m": [12.3, null],
                "relative_humidity_2m": [88, 90]
            },
            "daily": {
                "time": ["2025-10-14"],
                "temperature_2m_max": [20.0],
                "temperature_2m_min": [10.0],
                "precipitation_probability_max": [30]
            }
        })
    }

    #[test]
    fn deserializes_full_response() {
        let response: ForecastResponse = serde_json::from_value(sample()).expect("should parse");
        assert_eq!(response.timezone.as_deref(), Some("America/Bogota"));
        assert_eq!(response.utc_offset_seconds, Some(-18000));
        assert_eq!(response.hourly.temperature_2m, vec![Some(12.3), None]);
        assert_eq!(response.hourly.relative_humidity_2m, vec![Some(88), Some(90)]);
        assert_eq!(response.daily.time, vec!["2025-10-14".to_string()]);
        assert_eq!(response.daily.precipitation_probability_max, vec![Some(30)]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let mut value = sample();
        value["current"] = serde_json::json!({"temperature_2m": 1.0});
        assert!(serde_json::from_value::<ForecastResponse>(value).is_ok());
    }

    #[test]
    fn missing_hourly_is_rejected() {
        let mut value = sample();
        value.as_object_mut().expect("object").remove("hourly");
        let err = serde_json::from_value::<ForecastResponse>(value).expect_err("should fail");
        assert!(err.to_string().contains("hourly"));
    }

    #[test]
    fn missing_daily_series_is_rejected() {
        let mut value = sample();
        value["daily"]
            .as_object_mut()
            .expect("object")
            .remove("temperature_2m_min");
        let err = serde_json::from_value::<ForecastResponse>(value).expect_err("should fail");
        assert!(err.to_string().contains("temperature_2m_min"));
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let mut value = sample();
        value["hourly"]["relative_humidity_2m"] = serde_json::json!(["high", "low"]);
        assert!(serde_json::from_value::<ForecastResponse>(value).is_err());
    }

    #[test]
    fn whole_number_floats_are_accepted_as_percentages() {
        let mut value = sample();
        value["hourly"]["relative_humidity_2m"] = serde_json::json!([80.0, 81, null]);
        value["daily"]["precipitation_probability_max"] = serde_json::json!([45.0]);
        let response: ForecastResponse = serde_json::from_value(value).expect("should parse");
        assert_eq!(
            response.hourly.relative_humidity_2m,
            vec![Some(80), Some(81), None]
        );
        assert_eq!(response.daily.precipitation_probability_max, vec![Some(45)]);
    }

    #[test]
    fn fractional_percentage_is_rejected() {
        let mut value = sample();
        value["hourly"]["relative_humidity_2m"] = serde_json::json!([80.5, 81]);
        let err = serde_json::from_value::<ForecastResponse>(value).expect_err("should fail");
        assert!(err.to_string().contains("whole-number percentage"));
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let mut value = sample();
        value["daily"]["precipitation_probability_max"] = serde_json::json!([-5]);
        assert!(serde_json::from_value::<ForecastResponse>(value).is_err());
    }

    #[test]
    fn hourly_time_is_optional() {
        let mut value = sample();
        value["hourly"]
            .as_object_mut()
            .expect("object")
            .remove("time");
        let response: ForecastResponse = serde_json::from_value(value).expect("should parse");
        assert!(response.hourly.time.is_empty());
    }
}
