//! Storage error types.

use thiserror::Error;

/// Local registration store failures.
///
/// Any of these is fatal to the enclosing operation: the reconciler never
/// reports success for an outcome it could not durably record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not obtain a database connection.
    #[error("database pool failure")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// A query failed.
    #[error("database query failed")]
    Query(#[from] diesel::result::Error),

    /// Schema migrations could not be applied.
    #[error("migration failed: {0}")]
    Migration(String),
}
