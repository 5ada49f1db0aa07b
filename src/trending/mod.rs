//! # Trending Searches
//!
//! Popularity counters for search terms, kept in a hosted document store.
//!
//! - [`store`]: the `TrendingStore` trait and its entry types
//! - [`appwrite`]: `TrendingStore` over the Appwrite Databases REST API
//! - [`recorder`]: `TrendingRecorder`, which swallows every store failure

pub mod appwrite;
pub mod recorder;
pub mod store;

pub use appwrite::{AppwriteConfig, AppwriteStore};
pub use recorder::TrendingRecorder;
pub use store::{DisabledStore, NewTrendingEntry, StoreError, TrendingEntry, TrendingStore};
