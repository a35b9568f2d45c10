//! Shared database types for Tradewind identity
//!
//! This module provides common database-related types used across domain
//! repositories, plus pool construction from configuration.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::record::MappingError;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    #[error("Stale version token: record was modified concurrently")]
    StaleVersion,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<MappingError> for RepositoryError {
    fn from(err: MappingError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::StaleVersion => {
                Error::Conflict("Record was modified concurrently".to_string())
            }
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Validation(msg),
        }
    }
}

/// Build the shared connection pool from configuration
pub async fn connect_pool(config: &Config) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    info!(
        max_connections = config.database_max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_becomes_invalid_data() {
        let err = RepositoryError::from(MappingError::UnknownOrdinal {
            entity: "Session",
            field: "status",
            value: 0,
        });

        match err {
            RepositoryError::InvalidData(msg) => {
                assert!(msg.contains("Session"));
                assert!(msg.contains("status"));
            }
            other => panic!("Expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn test_repository_error_converts_to_common_error() {
        assert!(matches!(
            Error::from(RepositoryError::NotFound),
            Error::NotFound(_)
        ));
        assert!(matches!(
            Error::from(RepositoryError::AlreadyExists),
            Error::Conflict(_)
        ));
        assert!(matches!(
            Error::from(RepositoryError::StaleVersion),
            Error::Conflict(_)
        ));
        assert!(matches!(
            Error::from(RepositoryError::InvalidData("bad".to_string())),
            Error::Validation(_)
        ));
    }
}
