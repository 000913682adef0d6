use crate::utils::error_chain_fmt;
use async_trait::async_trait;

#[derive(thiserror::Error)]
pub enum CollectionError {
    #[error("The stored collection at {location} is malformed")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("The stored collection at {location} could not be read")]
    Unreadable {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Whole-collection persistence for a JSON array of records.
///
/// Stores own the read-modify-write cycle; a collection only knows how to
/// hand back everything it holds and how to replace it in one step.
#[async_trait]
pub trait RecordCollection<T>: Send + Sync {
    /// `Ok(None)` when nothing has ever been saved.
    async fn load(&self) -> Result<Option<Vec<T>>, CollectionError>;

    async fn save(&self, records: &[T]) -> Result<(), CollectionError>;
}
