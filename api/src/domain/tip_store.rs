use crate::domain::record_collection::RecordCollection;
use crate::domain::tip::{Tip, TipContent, TipDate, TipSource};
use crate::utils::error_chain_fmt;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(thiserror::Error)]
pub enum TipStoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for TipStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Daily tips keyed by date, most recent write first.
pub struct TipStore {
    collection: Arc<dyn RecordCollection<Tip>>,
    write_lock: Mutex<()>,
}

impl TipStore {
    pub fn new(collection: Arc<dyn RecordCollection<Tip>>) -> Self {
        Self {
            collection,
            write_lock: Mutex::new(()),
        }
    }

    /// Insert `tip`, replacing whatever was stored for the same date.
    #[tracing::instrument(
        name = "Storing a daily tip",
        skip(self, tip),
        fields(tip_date = %tip.date, tip_source = tip.source.as_str())
    )]
    pub async fn put(&self, tip: Tip) -> Result<(), TipStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut tips = self.load().await?;
        tips.retain(|stored| stored.date != tip.date);
        tips.insert(0, tip);

        self.collection
            .save(&tips)
            .await
            .context("Failed to persist the daily tips")?;

        Ok(())
    }

    pub async fn put_admin_tip(
        &self,
        content: String,
        date: TipDate,
    ) -> Result<Tip, TipStoreError> {
        let content = TipContent::parse(content).map_err(TipStoreError::ValidationError)?;
        let tip = Tip::new(content, date, TipSource::Admin);
        self.put(tip.clone()).await?;
        Ok(tip)
    }

    #[tracing::instrument(name = "Looking up a daily tip", skip(self))]
    pub async fn get(&self, date: TipDate) -> Result<Option<Tip>, TipStoreError> {
        Ok(self.load().await?.into_iter().find(|tip| tip.date == date))
    }

    pub async fn list(&self) -> Result<Vec<Tip>, TipStoreError> {
        self.load().await
    }

    /// Today's entry from either source.
    pub async fn todays_tip(&self, today: TipDate) -> Result<Option<Tip>, TipStoreError> {
        self.get(today).await
    }

    async fn load(&self) -> Result<Vec<Tip>, TipStoreError> {
        let tips = self
            .collection
            .load()
            .await
            .context("Failed to load the daily tips")?;
        Ok(tips.unwrap_or_default())
    }
}
