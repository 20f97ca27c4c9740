use std::path::PathBuf;
use thiserror::Error;

/// Failure to read user records from the store.
///
/// Callers never distinguish between variants when responding; they exist so the operational log
/// says where the fault came from.
#[derive(Error, Debug)]
pub enum DbError {
    /// Query against PostgreSQL failed (connectivity, decoding, server error)
    #[error("Record query failed")]
    Query(#[from] sqlx::Error),

    /// Fixture file could not be read or decoded
    #[error("Failed to load records from {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
