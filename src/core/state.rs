//! # Application State
//!
//! Core business state for Reel. Domain logic only, no TUI-specific types.
//! Presentation state (scroll offsets, the input buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn MovieCatalog>     // movie metadata API
//! ├── recorder: Arc<TrendingRecorder>    // trending counters
//! ├── search: SearchState                // Loading | Failed | Loaded
//! ├── trending: Vec<TrendingEntry>       // cached top entries
//! ├── debouncer: Debouncer               // typed text → committed query
//! ├── committed_query: Option<String>    // None until the first commit
//! ├── issued_seq: u64                    // sequence of the latest fetch
//! ├── discard_stale: bool                // drop superseded fetch results
//! └── status_message: String             // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{Movie, MovieCatalog};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::Debouncer;
use crate::trending::{TrendingEntry, TrendingRecorder};

/// What the results area shows. Exactly one variant is active, so
/// "loading", "error" and "results" can never be on at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// A fetch for `query` is in flight.
    Loading { query: String },
    /// The last fetch failed; `message` is user-facing.
    Failed { message: String },
    /// The last fetch succeeded (possibly with no movies).
    Loaded { movies: Vec<Movie> },
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::Loaded { movies: Vec::new() }
    }
}

impl SearchState {
    pub fn movies(&self) -> &[Movie] {
        match self {
            SearchState::Loaded { movies } => movies,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

pub struct App {
    pub catalog: Arc<dyn MovieCatalog>,
    pub recorder: Arc<TrendingRecorder>,
    pub search: SearchState,
    pub trending: Vec<TrendingEntry>,
    pub debouncer: Debouncer,
    pub committed_query: Option<String>,
    /// Sequence number of the most recently issued fetch (0 = none yet).
    pub issued_seq: u64,
    /// When true, results from any fetch but the latest are dropped.
    pub discard_stale: bool,
    pub status_message: String,
    pub image_base_url: String,
}

impl App {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        recorder: Arc<TrendingRecorder>,
        quiet_period: Duration,
    ) -> Self {
        Self {
            catalog,
            recorder,
            search: SearchState::default(),
            trending: Vec::new(),
            debouncer: Debouncer::new(quiet_period),
            committed_query: None,
            issued_seq: 0,
            discard_stale: false,
            status_message: String::from("Welcome to Reel!"),
            image_base_url: crate::core::config::DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }

    pub fn from_config(
        catalog: Arc<dyn MovieCatalog>,
        recorder: Arc<TrendingRecorder>,
        config: &ResolvedConfig,
    ) -> Self {
        let mut app = Self::new(catalog, recorder, config.debounce);
        app.discard_stale = config.discard_stale;
        app.image_base_url = config.image_base_url.clone();
        app
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.search, SearchState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Reel!");
        assert!(!app.is_loading());
        assert!(app.trending.is_empty());
        assert!(app.committed_query.is_none());
        assert_eq!(app.issued_seq, 0);
        assert!(!app.discard_stale);
    }

    #[test]
    fn test_search_state_accessors() {
        let loaded = SearchState::Loaded {
            movies: vec![movie(1, "Heat")],
        };
        assert_eq!(loaded.movies().len(), 1);
        assert!(loaded.error_message().is_none());

        let failed = SearchState::Failed {
            message: "nope".to_string(),
        };
        assert!(failed.movies().is_empty());
        assert_eq!(failed.error_message(), Some("nope"));

        let loading = SearchState::Loading {
            query: "heat".to_string(),
        };
        assert!(loading.movies().is_empty());
        assert!(loading.error_message().is_none());
    }
}
