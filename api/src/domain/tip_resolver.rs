use crate::domain::record_collection::{CollectionError, RecordCollection};
use crate::domain::tip::{Tip, TipContent, TipDate};
use crate::utils::error_chain_fmt;
use std::sync::Arc;

#[derive(thiserror::Error)]
pub enum ResolveError {
    #[error("The daily tip collection could not be parsed")]
    ParseFailure(#[source] CollectionError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An admin wrote a tip for the date: send it and skip scraping.
    AdminTip(TipContent),
    /// The external scraper has to run.
    NoAdminTip,
}

impl Resolution {
    pub fn scrape_needed(&self) -> bool {
        matches!(self, Resolution::NoAdminTip)
    }
}

/// Decides whether an admin-authored tip overrides scraping for a date.
///
/// Scraper entries are never returned: only `source == admin` counts.
pub struct TipResolver {
    collection: Arc<dyn RecordCollection<Tip>>,
}

impl TipResolver {
    pub fn new(collection: Arc<dyn RecordCollection<Tip>>) -> Self {
        Self { collection }
    }

    #[tracing::instrument(name = "Resolving the daily tip", skip(self))]
    pub async fn resolve_for_date(&self, date: TipDate) -> Result<Resolution, ResolveError> {
        let tips = match self.collection.load().await {
            Ok(Some(tips)) => tips,
            Ok(None) => {
                tracing::info!("No tip collection has been written yet");
                return Ok(Resolution::NoAdminTip);
            }
            Err(e @ CollectionError::Malformed { .. }) => {
                return Err(ResolveError::ParseFailure(e));
            }
            Err(CollectionError::Unreadable { location, source }) => {
                tracing::warn!(
                    error.cause_chain = ?source,
                    error.message = %source,
                    location = %location,
                    "Tip collection is unreadable, falling back to scraping"
                );
                return Ok(Resolution::NoAdminTip);
            }
            Err(CollectionError::UnexpectedError(e)) => return Err(e.into()),
        };

        let resolution = tips
            .into_iter()
            .find(|tip| tip.date == date && tip.is_from_admin())
            .map(|tip| Resolution::AdminTip(tip.content))
            .unwrap_or(Resolution::NoAdminTip);

        tracing::info!(scrape_needed = resolution.scrape_needed(), "Daily tip resolved");
        Ok(resolution)
    }
}
