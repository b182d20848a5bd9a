use async_trait::async_trait;
use thiserror::Error;

use shared_models::ActionError;

/// A record with a stable string identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("A record with id {0} already exists")]
    DuplicateId(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Storage capability used by the mutation actions and views.
///
/// `list` returns records in insertion order.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError>;

    async fn append(&self, record: T) -> Result<T, StoreError>;

    async fn list(&self) -> Result<Vec<T>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list().await?.len())
    }
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(_) => ActionError::Conflict(err.to_string()),
            StoreError::Unavailable(_) => ActionError::Store(err.to_string()),
        }
    }
}

impl From<StoreError> for shared_models::AppError {
    fn from(err: StoreError) -> Self {
        shared_models::AppError::Database(err.to_string())
    }
}
