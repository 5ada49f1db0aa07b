//! Records successful searches and reads back the most popular ones.
//!
//! Trending is decoration: a broken or missing store must never affect the
//! search itself. Every store error is logged here and goes no further.

use std::sync::Arc;

use log::{error, info};

use super::store::{NewTrendingEntry, StoreError, TrendingEntry, TrendingStore};
use crate::catalog::Movie;

pub const DEFAULT_TRENDING_LIMIT: usize = 5;

pub struct TrendingRecorder {
    store: Arc<dyn TrendingStore>,
    image_base_url: String,
    limit: usize,
}

impl TrendingRecorder {
    pub fn new(store: Arc<dyn TrendingStore>, image_base_url: String, limit: usize) -> Self {
        Self {
            store,
            image_base_url,
            limit,
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Bumps the counter for `term`, creating it with the top result's poster
    /// and title if it does not exist yet.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        if let Err(e) = self.try_record(term, movie).await {
            error!("Error updating search count for '{}': {}", term, e);
        }
    }

    async fn try_record(&self, term: &str, movie: &Movie) -> Result<(), StoreError> {
        match self.store.find_by_term(term).await? {
            Some(entry) => self.store.increment(&entry).await,
            None => {
                let entry = NewTrendingEntry {
                    search_term: term.to_string(),
                    movie_id: movie.id,
                    poster_url: movie.poster_url(&self.image_base_url),
                    title: movie.title.clone(),
                };
                let created = self.store.create(&entry).await?;
                info!("Started trending counter {} for '{}'", created.id, term);
                Ok(())
            }
        }
    }

    /// Top entries by count. `None` when the store failed; callers keep
    /// whatever they were showing before.
    pub async fn load_trending(&self) -> Option<Vec<TrendingEntry>> {
        match self.store.top_by_count(self.limit).await {
            Ok(entries) => Some(entries),
            Err(e) => {
                error!(
                    "Error fetching trending movies from {}: {}",
                    self.store.name(),
                    e
                );
                None
            }
        }
    }
}
