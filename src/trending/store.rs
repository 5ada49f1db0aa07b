use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors returned by a trending store.
#[derive(Debug)]
pub enum StoreError {
    /// No store configured (missing project/database/collection IDs).
    NotConfigured,
    /// Network-level failure.
    Network(String),
    /// Store returned a non-success HTTP status.
    Api { status: u16, message: String },
    /// Failed to decode the store's response.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotConfigured => write!(f, "trending store not configured"),
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// One search-term counter as stored remotely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrendingEntry {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: Option<u64>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl TrendingEntry {
    /// Text shown for the entry: the movie title, or the search term when the
    /// record predates titles being stored.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.search_term)
    }
}

/// Fields for a counter that does not exist yet. The store assigns the ID and
/// starts the count at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrendingEntry {
    pub search_term: String,
    pub movie_id: u64,
    pub poster_url: Option<String>,
    pub title: String,
}

#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Returns the name of the store.
    fn name(&self) -> &str;

    /// Equality lookup on the search term.
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingEntry>, StoreError>;

    /// Creates a new counter document with `count = 1`.
    async fn create(&self, entry: &NewTrendingEntry) -> Result<TrendingEntry, StoreError>;

    /// Increments the counter of an existing document by one.
    async fn increment(&self, entry: &TrendingEntry) -> Result<(), StoreError>;

    /// Top `limit` documents, highest count first.
    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingEntry>, StoreError>;
}

/// Store used when no backend is configured. Every call fails with
/// `StoreError::NotConfigured`.
pub struct DisabledStore;

#[async_trait]
impl TrendingStore for DisabledStore {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn find_by_term(&self, _term: &str) -> Result<Option<TrendingEntry>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn create(&self, _entry: &NewTrendingEntry) -> Result<TrendingEntry, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn increment(&self, _entry: &TrendingEntry) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn top_by_count(&self, _limit: usize) -> Result<Vec<TrendingEntry>, StoreError> {
        Err(StoreError::NotConfigured)
    }
}
