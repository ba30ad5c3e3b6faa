//! Error types for the HealthTrack core

use thiserror::Error;

/// Errors raised by the metrics calculator and input validation.
///
/// The aggregation functions never fail, so this is the only error channel
/// the core exposes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: &'static str, message: String },
}

impl HealthError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        HealthError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            HealthError::InvalidInput { field, .. } => field,
        }
    }
}

pub type HealthResult<T> = Result<T, HealthError>;
