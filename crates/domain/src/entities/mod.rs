//! Domain entities

mod forecast;

pub use forecast::{DailyForecastEntry, ForecastQuery, WeatherReport};
