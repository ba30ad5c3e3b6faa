//! Error types for the host services

use healthtrack_shared::HealthError;
use thiserror::Error;

use crate::store::StoreError;

/// Service layer error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(#[from] HealthError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
