//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Forecast adapter against a mock Open-Meteo server
//! - Error classification into upstream vs data mapping failures

use application::{ApplicationError, ForecastPort};
use domain::GeoLocation;
use infrastructure::{ForecastAdapter, WeatherConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 4.625,
        "longitude": -74.125,
        "timezone": "America/Bogota",
        "hourly": {
            "time": ["2025-10-14T00:00", "2025-10-14T01:00"],
            "temperature_2m": [15.0, null],
            "relative_humidity_2m": [80, 81]
        },
        "daily": {
            "time": ["2025-10-14", "2025-10-15"],
            "temperature_2m_max": [20.0, 22.0],
            "temperature_2m_min": [10.0, 12.0],
            "precipitation_probability_max": [30, 40]
        }
    })
}

fn bogota() -> GeoLocation {
    GeoLocation::new(4.6097, -74.0817).unwrap()
}

fn adapter_for(server: &MockServer) -> ForecastAdapter {
    ForecastAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 2,
    })
    .unwrap()
}

// ============================================================================
// Success
// ============================================================================

mod success_tests {
    use super::*;

    #[tokio::test]
    async fn fetches_and_converts_series() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "4.6097"))
            .and(query_param("longitude", "-74.0817"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let payload = adapter_for(&mock_server)
            .fetch_forecast(&bogota())
            .await
            .unwrap();

        assert_eq!(payload.hourly.temperature_2m, vec![Some(15.0), None]);
        assert_eq!(payload.hourly.relative_humidity_2m, vec![Some(80), Some(81)]);
        assert_eq!(payload.daily.time.len(), 2);
        assert_eq!(payload.daily.temperature_max, vec![Some(20.0), Some(22.0)]);
        assert_eq!(payload.daily.precipitation_probability, vec![Some(30), Some(40)]);
    }
}

// ============================================================================
// Failure classification
// ============================================================================

mod failure_tests {
    use super::*;

    async fn fetch_with(template: ResponseTemplate) -> ApplicationError {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        adapter_for(&mock_server)
            .fetch_forecast(&bogota())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn server_error_is_upstream() {
        let err = fetch_with(ResponseTemplate::new(503)).await;
        match err {
            ApplicationError::UpstreamUnavailable(msg) => {
                assert!(msg.starts_with("Failed to connect to Open-Meteo API: "));
                assert!(msg.contains("503"));
            },
            other => panic!("Expected UpstreamUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn client_error_is_upstream() {
        let err = fetch_with(ResponseTemplate::new(400)).await;
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn non_json_body_is_upstream() {
        let err = fetch_with(ResponseTemplate::new(200).set_body_string("<html></html>")).await;
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn missing_daily_is_data_mapping() {
        let mut body = forecast_body();
        body.as_object_mut().unwrap().remove("daily");

        let err = fetch_with(ResponseTemplate::new(200).set_body_json(body)).await;
        match err {
            ApplicationError::DataMapping(msg) => {
                assert!(msg.starts_with("Error in data mapping: "));
                assert!(msg.contains("daily"));
            },
            other => panic!("Expected DataMapping, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_upstream() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let adapter = ForecastAdapter::with_config(WeatherConfig {
            base_url: uri,
            timeout_secs: 2,
        })
        .unwrap();
        let err = adapter.fetch_forecast(&bogota()).await.unwrap_err();
        assert!(err.is_upstream());
    }
}
