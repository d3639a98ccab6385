//! Error types for the record store.

use crate::types::RecordId;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
