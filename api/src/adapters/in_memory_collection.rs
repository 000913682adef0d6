use crate::domain::record_collection::{CollectionError, RecordCollection};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local collection, used when nothing has to outlive the process.
#[derive(Debug)]
pub struct InMemoryCollection<T> {
    records: RwLock<Option<Vec<T>>>,
}

impl<T> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(None),
        }
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordCollection<T> for InMemoryCollection<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Option<Vec<T>>, CollectionError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> Result<(), CollectionError> {
        *self.records.write().await = Some(records.to_vec());
        Ok(())
    }
}
