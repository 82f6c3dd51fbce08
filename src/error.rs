//! Errors raised by the standings engine.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while resolving or ranking a scope.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("Standings are not supported for scope: {0}")]
    UnsupportedScope(String),

    #[error("Unsupported standing metric: {0}")]
    UnsupportedMetric(String),

    #[error("Invalid assigned point value: {0:?}")]
    InvalidPointValue(String),

    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
