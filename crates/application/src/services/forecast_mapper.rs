//! Forecast mapper
//!
//! Pure transformation from the provider's columnar series into a
//! [`WeatherReport`]. Either every field maps or the whole report fails.

use chrono::NaiveDate;
use domain::{DailyForecastEntry, ForecastQuery, WeatherReport};

use crate::{error::ApplicationError, ports::RawForecastPayload};

/// Build a report for `query` from `payload`, reading current conditions at
/// `current_hour` (0-23) of the hourly series.
///
/// A `null` hourly reading yields `None` in the report. A missing index, a
/// `null` daily value, or an unparseable date fails the whole mapping.
pub fn build_report(
    payload: &RawForecastPayload,
    query: &ForecastQuery,
    current_hour: usize,
) -> Result<WeatherReport, ApplicationError> {
    let hourly = &payload.hourly;
    let current_temperature =
        *series_entry(&hourly.temperature_2m, "hourly.temperature_2m", current_hour)?;
    let current_humidity = *series_entry(
        &hourly.relative_humidity_2m,
        "hourly.relative_humidity_2m",
        current_hour,
    )?;

    let daily = &payload.daily;
    let daily_forecasts = daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| {
            Ok(DailyForecastEntry {
                date: parse_date(date, i)?,
                temperature_max: required(&daily.temperature_max, "daily.temperature_2m_max", i)?,
                temperature_min: required(&daily.temperature_min, "daily.temperature_2m_min", i)?,
                precipitation_probability: required(
                    &daily.precipitation_probability,
                    "daily.precipitation_probability_max",
                    i,
                )?,
            })
        })
        .collect::<Result<Vec<_>, ApplicationError>>()?;

    let location = query.location();
    Ok(WeatherReport {
        location_label: query.location_label(),
        latitude: location.latitude(),
        longitude: location.longitude(),
        current_temperature,
        current_humidity,
        daily_forecasts,
        info_message: query.info_message(),
    })
}

fn series_entry<'a, T>(
    series: &'a [Option<T>],
    name: &str,
    index: usize,
) -> Result<&'a Option<T>, ApplicationError> {
    series.get(index).ok_or_else(|| {
        ApplicationError::data_mapping(format!(
            "{name} has {} entries, index {index} is out of range",
            series.len()
        ))
    })
}

fn required<T: Copy>(series: &[Option<T>], name: &str, index: usize) -> Result<T, ApplicationError> {
    series_entry(series, name, index)?
        .ok_or_else(|| ApplicationError::data_mapping(format!("{name}[{index}] is null")))
}

fn parse_date(raw: &str, index: usize) -> Result<NaiveDate, ApplicationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        ApplicationError::data_mapping(format!("daily.time[{index}] '{raw}' is not a date: {e}"))
    })
}
