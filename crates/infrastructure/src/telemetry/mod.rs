//! Logging setup
//!
//! Console logging through `tracing-subscriber`, as human-readable text or
//! one JSON object per line.

mod logging;

pub use logging::{LogFormat, TelemetryConfig, TelemetryError, init_logging};
