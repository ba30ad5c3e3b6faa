//! HealthTrack Shared Library
//!
//! Pure health-metrics and activity-aggregation core shared by the browser
//! adapter (`healthtrack-wasm`) and the native host (`healthtrack-host`).
//! Nothing in this crate performs I/O or reads the clock: callers hand in
//! already-loaded records plus an explicit `today`.

pub mod aggregation;
pub mod dashboard;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use aggregation::*;
pub use dashboard::*;
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use units::WaterUnit;
