//! Core error types for the Goalpace tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::contributions::ContributionError;
use crate::goals::GoalError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Goal rejected: {0}")]
    Goal(#[from] GoalError),

    #[error("Contribution rejected: {0}")]
    Contribution(#[from] ContributionError),

    #[error("Storage operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Storage-agnostic error type for snapshot and settings persistence.
///
/// Details are carried as strings so the storage crate can convert its
/// backend-specific errors without leaking them into the core.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// The persisted snapshot could not be read or decoded.
    #[error("Failed to read stored snapshot: {0}")]
    ReadFailed(String),

    /// The snapshot could not be written. Never swallowed.
    #[error("Failed to write snapshot: {0}")]
    WriteFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

/// Validation errors for raw user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl Error {
    /// True for failures caused by the values the user typed in, as opposed
    /// to storage or configuration problems.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::Goal(_) | Error::Contribution(_) | Error::Validation(_)
        )
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Database(DatabaseError::ReadFailed(err.to_string()))
    }
}
