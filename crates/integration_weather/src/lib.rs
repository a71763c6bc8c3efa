//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Forecast API (<https://open-meteo.com>).
//! Fetches the hourly and daily series used by the forecast endpoint; no API key required.

pub mod client;
mod models;

pub use client::{ForecastClient, OpenMeteoClient, WeatherConfig, WeatherError};
pub use models::{DailyData, ForecastResponse, HourlyData};
