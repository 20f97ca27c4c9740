//! Record store abstraction.

use crate::db::{errors::Result, models::users::UserRecord};

/// Read-only access to the user record collection.
///
/// Implementations must return records in a stable order, so that repeated scans over unchanged
/// data produce identical results.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Read every record in the collection
    async fn scan_users(&self) -> Result<Vec<UserRecord>>;

    /// Release any held connections. Called once on shutdown.
    async fn close(&self) {}
}
