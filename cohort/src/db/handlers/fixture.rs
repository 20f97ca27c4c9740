//! In-memory record store loaded from a JSON file.
//!
//! The file holds a JSON array of user records, e.g. an export of the collection. Records are read
//! once at startup and never change afterwards.

use std::{path::Path, sync::Arc};
use tracing::info;

use crate::db::{
    errors::{DbError, Result},
    handlers::store::RecordStore,
    models::users::UserRecord,
};

#[derive(Clone, Default)]
pub struct FixtureStore {
    records: Arc<[UserRecord]>,
}

impl FixtureStore {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records: records.into() }
    }

    /// Load records from a JSON array on disk.
    pub async fn load(path: &Path) -> Result<Self> {
        let decode_error = |source: anyhow::Error| DbError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let contents = tokio::fs::read(path).await.map_err(|e| decode_error(e.into()))?;
        let records: Vec<UserRecord> = serde_json::from_slice(&contents).map_err(|e| decode_error(e.into()))?;

        let store = Self::new(records);
        info!("Loaded {} user records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl RecordStore for FixtureStore {
    async fn scan_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.to_vec())
    }
}
