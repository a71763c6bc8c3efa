//! Forecast service - fetches provider series and maps them into a report

use std::sync::Arc;

use chrono::{DateTime, Timelike, Utc};
use domain::{ForecastQuery, WeatherReport};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::ForecastPort, services::build_report};

/// Service for the forecast lookup use case
pub struct ForecastService {
    port: Arc<dyn ForecastPort>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(port: Arc<dyn ForecastPort>) -> Self {
        Self { port }
    }

    /// Build a report for `query`, reading current conditions at the current
    /// UTC hour
    pub async fn get_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<WeatherReport, ApplicationError> {
        self.get_forecast_at(query, Utc::now()).await
    }

    /// Build a report for `query` as of `now`
    ///
    /// The hourly index is the UTC hour of `now`, not the hour in the
    /// timezone the provider resolved for the location.
    #[instrument(
        skip(self, query),
        fields(lat = %query.location().latitude(), lon = %query.location().longitude())
    )]
    pub async fn get_forecast_at(
        &self,
        query: &ForecastQuery,
        now: DateTime<Utc>,
    ) -> Result<WeatherReport, ApplicationError> {
        let payload = self.port.fetch_forecast(query.location()).await?;

        let current_hour = now.hour() as usize;
        let report = build_report(&payload, query, current_hour).inspect_err(|e| {
            warn!(error = %e, current_hour, "Failed to map forecast payload");
        })?;

        debug!(
            location = %report.location_label,
            days = report.daily_forecasts.len(),
            "Forecast report built"
        );
        Ok(report)
    }
}
