//! Application services - Use case implementations

mod forecast_mapper;
mod forecast_service;

pub use forecast_mapper::build_report;
pub use forecast_service::ForecastService;
