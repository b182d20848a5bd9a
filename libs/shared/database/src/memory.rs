use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::repository::{Entity, Repository, StoreError};

/// Process-lifetime store backed by an ordered vector.
///
/// Lookups are linear scans by id. The duplicate-id check and the push happen
/// under one write lock.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Seeds the store. Later records with an id already present are dropped.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut seeded: Vec<T> = Vec::new();
        for record in records {
            if seeded.iter().any(|r| r.id() == record.id()) {
                debug!("Skipping duplicate seed record {}", record.id());
                continue;
            }
            seeded.push(record);
        }

        Self {
            records: RwLock::new(seeded),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn append(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }

        records.push(record.clone());
        debug!("Appended record {} ({} total)", record.id(), records.len());

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}
