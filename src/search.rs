//! # Movie Fetch Flow
//!
//! One committed query in, one `SearchOutcome` out:
//!
//! ```text
//! query ─► CatalogQuery ─► catalog.fetch()
//!                              │
//!              ┌───────────────┼────────────────────┐
//!              ▼               ▼                    ▼
//!         Ok(movies)     Rejected(msg)        any other error
//!              │               │                    │
//!   record top result     Failed(msg or       Failed(generic)
//!   (non-empty query)      generic)
//!              │
//!        Loaded(movies)
//! ```
//!
//! The function never fails, so the caller always gets exactly one outcome
//! to settle the loading state with.

use log::{error, info, warn};

use crate::catalog::{CatalogError, CatalogQuery, Movie, MovieCatalog};
use crate::trending::TrendingRecorder;

/// User-facing text for every failure that has no message of its own.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Result of one fetch, as the reducer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Loaded(Vec<Movie>),
    Failed(String),
}

/// Fetches movies for `query` and, for a non-empty query with at least one
/// hit, records the search against the top result.
///
/// The trending write finishes before this returns.
pub async fn fetch_movies(
    catalog: &dyn MovieCatalog,
    recorder: &TrendingRecorder,
    query: &str,
) -> SearchOutcome {
    let request = CatalogQuery::from_query(query);
    info!("Fetching movies from {}: {:?}", catalog.name(), request);

    match catalog.fetch(&request).await {
        Ok(movies) => {
            if !query.is_empty()
                && let Some(top) = movies.first()
            {
                recorder.record_search(query, top).await;
            }
            SearchOutcome::Loaded(movies)
        }
        Err(CatalogError::Rejected(message)) => {
            warn!("Catalog rejected query {:?}: {:?}", query, message);
            SearchOutcome::Failed(message.unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string()))
        }
        Err(e) => {
            error!("Error fetching movies: {}", e);
            SearchOutcome::Failed(FETCH_FAILED_MESSAGE.to_string())
        }
    }
}
