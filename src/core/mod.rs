//! # Core Application Logic
//!
//! This module contains Reel's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Debouncer            │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  search /  │
//!             │  Adapter   │          │  trending  │
//!             │ (ratatui)  │          │  (I/O)     │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `SearchState` display mode
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`debounce`]: Keystrokes to committed query
//! - [`config`]: Settings file, env vars, and their resolution

pub mod action;
pub mod config;
pub mod debounce;
pub mod state;
