//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogQuery, Movie, MovieCatalog};
use crate::trending::{
    NewTrendingEntry, StoreError, TrendingEntry, TrendingRecorder, TrendingStore,
};

/// A movie with just enough fields for tests.
pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        vote_average: Some(7.5),
        original_language: Some("en".to_string()),
        release_date: Some("2008-07-16".to_string()),
        overview: None,
    }
}

/// What a `FakeCatalog` answers with.
pub enum FakeReply {
    Movies(Vec<Movie>),
    Status(u16),
    Rejected(Option<String>),
    Network,
}

/// Catalog that answers every fetch with a canned reply and remembers
/// what was asked.
pub struct FakeCatalog {
    reply: FakeReply,
    requests: Mutex<Vec<CatalogQuery>>,
}

impl FakeCatalog {
    pub fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CatalogQuery> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError> {
        self.requests.lock().unwrap().push(query.clone());
        match &self.reply {
            FakeReply::Movies(movies) => Ok(movies.clone()),
            FakeReply::Status(status) => Err(CatalogError::Api {
                status: *status,
                message: "fake failure".to_string(),
            }),
            FakeReply::Rejected(message) => Err(CatalogError::Rejected(message.clone())),
            FakeReply::Network => Err(CatalogError::Network("connection refused".to_string())),
        }
    }
}

/// In-memory trending store. `failing()` makes every call error out.
pub struct MemoryStore {
    entries: Mutex<Vec<TrendingEntry>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn entries(&self) -> Vec<TrendingEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Network("store unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TrendingStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingEntry>, StoreError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().find(|e| e.search_term == term).cloned())
    }

    async fn create(&self, entry: &NewTrendingEntry) -> Result<TrendingEntry, StoreError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let created = TrendingEntry {
            id: format!("doc{}", entries.len() + 1),
            search_term: entry.search_term.clone(),
            count: 1,
            movie_id: Some(entry.movie_id),
            poster_url: entry.poster_url.clone(),
            title: Some(entry.title.clone()),
        };
        entries.push(created.clone());
        Ok(created)
    }

    async fn increment(&self, entry: &TrendingEntry) -> Result<(), StoreError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(stored) => {
                stored.count = entry.count + 1;
                Ok(())
            }
            None => Err(StoreError::Api {
                status: 404,
                message: "document not found".to_string(),
            }),
        }
    }

    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingEntry>, StoreError> {
        self.check()?;
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        Ok(entries)
    }
}

/// Creates a test App over the given catalog and an empty in-memory store.
pub fn test_app_with(catalog: Arc<dyn MovieCatalog>) -> crate::core::state::App {
    let recorder = TrendingRecorder::new(
        Arc::new(MemoryStore::new()),
        "https://img.test/w500".to_string(),
        5,
    );
    crate::core::state::App::new(catalog, Arc::new(recorder), Duration::from_millis(500))
}

/// Creates a test App whose catalog always returns no movies.
pub fn test_app() -> crate::core::state::App {
    test_app_with(Arc::new(FakeCatalog::new(FakeReply::Movies(Vec::new()))))
}
