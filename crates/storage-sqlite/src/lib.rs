//! SQLite storage implementation for Goalpace.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `goalpace-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The snapshot and settings repositories
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `goalpace-core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!               │
//!               ▼
//!     storage-sqlite (this crate)
//!               │
//!               ▼
//!           SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod settings;
pub mod snapshots;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, prepare_database, run_migrations,
    DbConnection, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use settings::SettingsRepository;
pub use snapshots::SnapshotRepository;

// Re-export from goalpace-core for convenience
pub use goalpace_core::errors::{DatabaseError, Error, Result};
