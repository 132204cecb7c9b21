//! Error types for the catalog crate
//!
//! `DomainError` covers the service and adapter layers. Lookup misses at
//! the repository port are `None`, so `NotFound` only appears once a
//! caller decides a miss is a failure.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(format!("invalid category data: {}", e))
    }
}
