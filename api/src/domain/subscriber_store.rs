use crate::domain::record_collection::RecordCollection;
use crate::domain::subscriber::{Subscriber, SubscriberEmail, SubscriberStatus};
use crate::utils::error_chain_fmt;
use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    InvalidEmail(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct SubscriberStats {
    pub total: usize,
    pub active: usize,
}

/// Append-only subscriber list. The same address may appear any number of times.
pub struct SubscriberStore {
    collection: Arc<dyn RecordCollection<Subscriber>>,
    write_lock: Mutex<()>,
}

impl SubscriberStore {
    pub fn new(collection: Arc<dyn RecordCollection<Subscriber>>) -> Self {
        Self {
            collection,
            write_lock: Mutex::new(()),
        }
    }

    #[tracing::instrument(name = "Adding a new subscriber", skip(self, email), fields(subscriber_email = %email))]
    pub async fn add(&self, email: String) -> Result<Subscriber, SubscribeError> {
        let email = SubscriberEmail::parse(email).map_err(SubscribeError::InvalidEmail)?;
        let subscriber = Subscriber::active(email, Utc::now());

        let _guard = self.write_lock.lock().await;
        let mut subscribers = self.load().await?;
        subscribers.push(subscriber.clone());
        self.collection
            .save(&subscribers)
            .await
            .context("Failed to persist the subscriber list")?;

        tracing::info!(total = subscribers.len(), "Subscriber stored");
        Ok(subscriber)
    }

    pub async fn list(&self) -> Result<Vec<Subscriber>, anyhow::Error> {
        self.load().await
    }

    /// The last `count` sign-ups, newest first.
    pub async fn recent(&self, count: usize) -> Result<Vec<Subscriber>, anyhow::Error> {
        let subscribers = self.load().await?;
        Ok(subscribers.into_iter().rev().take(count).collect())
    }

    pub async fn stats(&self) -> Result<SubscriberStats, anyhow::Error> {
        let subscribers = self.load().await?;
        Ok(SubscriberStats {
            total: subscribers.len(),
            active: subscribers
                .iter()
                .filter(|s| s.status == SubscriberStatus::Active)
                .count(),
        })
    }

    async fn load(&self) -> Result<Vec<Subscriber>, anyhow::Error> {
        let subscribers = self
            .collection
            .load()
            .await
            .context("Failed to load the subscriber list")?;
        Ok(subscribers.unwrap_or_default())
    }
}
