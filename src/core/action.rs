//! # Actions
//!
//! Everything that can happen in Reel becomes an `Action`.
//! User types? That's `Action::InputChanged`.
//! The catalog responds? That's `Action::SearchFinished`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect` the caller must perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The fetch lifecycle as seen by `SearchState`:
//!
//! ```text
//!            QueryCommitted(q)              SearchFinished(Loaded)
//!  (any) ─────────────────────► Loading ─────────────────────────► Loaded
//!                                  │
//!                                  │ SearchFinished(Failed)
//!                                  └─────────────────────────────► Failed
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::core::state::{App, SearchState};
use crate::search::SearchOutcome;
use crate::trending::TrendingEntry;

#[derive(Debug)]
pub enum Action {
    /// First frame: commit the empty query (default listing).
    Mount,
    /// The search box text changed.
    InputChanged { text: String, at: Instant },
    /// Commit the pending text without waiting (Enter).
    FlushQuery,
    /// Event loop heartbeat; publishes debounced text when due.
    Tick(Instant),
    /// A query became the committed query.
    QueryCommitted(String),
    /// A fetch settled.
    SearchFinished { seq: u64, outcome: SearchOutcome },
    /// Request a (re)load of the trending strip.
    LoadTrending,
    /// Trending load settled; `None` means the store failed.
    TrendingLoaded(Option<Vec<TrendingEntry>>),
    Quit,
}

/// Side effects `update()` asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a fetch for `query`, tagged with `seq`.
    Fetch { seq: u64, query: String },
    /// Read the top trending entries.
    LoadTrending,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => update(app, Action::QueryCommitted(String::new())),
        Action::InputChanged { text, at } => {
            app.debouncer.input(text, at);
            Effect::None
        }
        Action::FlushQuery => match app.debouncer.flush() {
            Some(query) => update(app, Action::QueryCommitted(query)),
            None => Effect::None,
        },
        Action::Tick(now) => match app.debouncer.poll(now) {
            Some(query) => update(app, Action::QueryCommitted(query)),
            None => Effect::None,
        },
        Action::QueryCommitted(query) => {
            if app.committed_query.as_deref() == Some(query.as_str()) {
                debug!("Committed query unchanged ({:?}), not refetching", query);
                return Effect::None;
            }
            app.committed_query = Some(query.clone());
            app.issued_seq += 1;
            app.search = SearchState::Loading {
                query: query.clone(),
            };
            app.status_message = String::from("Searching...");
            info!("Query committed: {:?} (seq {})", query, app.issued_seq);
            Effect::Fetch {
                seq: app.issued_seq,
                query,
            }
        }
        Action::SearchFinished { seq, outcome } => {
            if app.discard_stale && seq != app.issued_seq {
                info!(
                    "Dropping stale result for seq {} (latest is {})",
                    seq, app.issued_seq
                );
                return Effect::None;
            }
            match outcome {
                SearchOutcome::Loaded(movies) => {
                    app.status_message = match movies.len() {
                        1 => String::from("1 movie"),
                        n => format!("{n} movies"),
                    };
                    app.search = SearchState::Loaded { movies };
                }
                SearchOutcome::Failed(message) => {
                    app.status_message = String::from("Search failed");
                    app.search = SearchState::Failed { message };
                }
            }
            Effect::None
        }
        Action::LoadTrending => Effect::LoadTrending,
        Action::TrendingLoaded(Some(entries)) => {
            app.trending = entries;
            Effect::None
        }
        Action::TrendingLoaded(None) => Effect::None,
        Action::Quit => Effect::Quit,
    }
}
