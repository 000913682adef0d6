use crate::domain::record_collection::{CollectionError, RecordCollection};
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A JSON array of records kept in a single local file.
///
/// Saves go through a sibling temporary file that is renamed over the target,
/// so a reader sees either the previous collection or the new one.
#[derive(Debug, Clone)]
pub struct JsonFileCollection<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileCollection<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl<T> RecordCollection<T> for JsonFileCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    #[tracing::instrument(name = "Reading a JSON collection", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<Vec<T>>, CollectionError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CollectionError::Unreadable {
                    location: self.location(),
                    source,
                })
            }
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| CollectionError::Malformed {
                location: self.location(),
                source,
            })
    }

    #[tracing::instrument(name = "Writing a JSON collection", skip(self, records), fields(path = %self.path.display(), records = records.len()))]
    async fn save(&self, records: &[T]) -> Result<(), CollectionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let body = serde_json::to_vec_pretty(records)
            .context("Failed to serialise the collection")?;

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        let staging = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        tokio::fs::write(&staging, body)
            .await
            .with_context(|| format!("Failed to write {}", staging.display()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.location()))?;

        Ok(())
    }
}
