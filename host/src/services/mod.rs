//! Services that drive the shared core against a profile store

pub mod dashboard;

pub use dashboard::{DashboardService, LogMealInput};
