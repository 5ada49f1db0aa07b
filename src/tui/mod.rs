//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each iteration:
//!
//! 1. draw (only when something changed)
//! 2. wait for a terminal event, at most until the debounce deadline
//! 3. send `Action::Tick` so a due query gets committed
//! 4. route terminal events to the search box / movie list
//! 5. drain actions sent back by background fetches
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps until the next debounce deadline (max 500ms), only
//!   redraws on events, results, or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::catalog::{MovieCatalog, TmdbCatalog};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::search::fetch_movies;
use crate::trending::{AppwriteStore, DisabledStore, TrendingRecorder, TrendingStore};
use crate::tui::component::EventHandler;
use crate::tui::components::{MovieListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_INTERVAL: Duration = Duration::from_millis(80);
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub movie_list: MovieListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            movie_list: MovieListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets us ignore key release events; terminals
        // without support ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Build the movie catalog from a resolved config.
pub fn build_catalog(config: &ResolvedConfig) -> Arc<dyn MovieCatalog> {
    if config.tmdb_api_token.is_none() {
        warn!("No TMDB API token configured; requests will likely be rejected");
    }
    Arc::new(TmdbCatalog::new(
        config.tmdb_api_token.clone(),
        Some(config.tmdb_base_url.clone()),
        config.request_timeout,
    ))
}

/// Build the trending recorder. Without Appwrite settings every store call
/// fails quietly and the trending strip stays hidden.
pub fn build_recorder(config: &ResolvedConfig) -> Arc<TrendingRecorder> {
    let store: Arc<dyn TrendingStore> = match &config.appwrite {
        Some(appwrite) => Arc::new(AppwriteStore::new(appwrite.clone())),
        None => {
            info!("Trending store not configured; trending disabled");
            Arc::new(DisabledStore)
        }
    };
    Arc::new(TrendingRecorder::new(
        store,
        config.image_base_url.clone(),
        config.trending_limit,
    ))
}

pub fn run(config: ResolvedConfig, initial_query: Option<String>) -> std::io::Result<()> {
    let catalog = build_catalog(&config);
    let recorder = build_recorder(&config);
    info!(
        "Using catalog '{}' and trending store '{}'",
        catalog.name(),
        recorder.store_name()
    );
    let mut app = App::from_config(catalog, recorder, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut should_quit = false;
    dispatch(&mut app, Action::Mount, &tx, &mut should_quit);
    dispatch(&mut app, Action::LoadTrending, &tx, &mut should_quit);
    if let Some(query) = initial_query {
        tui.search_box.set_text(&query);
        let text = tui.search_box.buffer.clone();
        dispatch(
            &mut app,
            Action::InputChanged {
                text,
                at: Instant::now(),
            },
            &tx,
            &mut should_quit,
        );
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        if app.is_loading() {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = poll_timeout(&app, Instant::now());
        let first_event = poll_event_timeout(timeout);

        // Publish the debounced query once its quiet period has elapsed
        let tick = update(&mut app, Action::Tick(Instant::now()));
        if tick != Effect::None {
            needs_redraw = true;
            handle_effect(&app, tick, &tx, &mut should_quit);
        }

        if first_event.is_some() {
            needs_redraw = true;
        }
        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    dispatch(&mut app, Action::Quit, &tx, &mut should_quit);
                }
                TuiEvent::RefreshTrending => {
                    dispatch(&mut app, Action::LoadTrending, &tx, &mut should_quit);
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.movie_list.handle_event(&event);
                }
                _ => match tui.search_box.handle_event(&event) {
                    Some(SearchEvent::Changed(text)) => {
                        let action = Action::InputChanged {
                            text,
                            at: Instant::now(),
                        };
                        dispatch(&mut app, action, &tx, &mut should_quit);
                    }
                    Some(SearchEvent::Submit) => {
                        dispatch(&mut app, Action::FlushQuery, &tx, &mut should_quit);
                    }
                    None => {}
                },
            }
        }

        // Handle background task actions (fetch results, trending loads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::SearchFinished { .. }) {
                tui.movie_list = MovieListState::new();
            }
            dispatch(&mut app, action, &tx, &mut should_quit);
        }
    }

    ratatui::restore();
    Ok(())
}

/// How long to wait for terminal input before the next loop iteration.
fn poll_timeout(app: &App, now: Instant) -> Duration {
    if app.is_loading() {
        return ANIMATION_INTERVAL;
    }
    match app.debouncer.deadline() {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_INTERVAL),
        None => IDLE_INTERVAL,
    }
}

fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    let effect = update(app, action);
    handle_effect(app, effect, tx, should_quit);
}

fn handle_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::Fetch { seq, query } => spawn_search(app, seq, query, tx.clone()),
        Effect::LoadTrending => spawn_trending_load(app, tx.clone()),
        Effect::Quit => *should_quit = true,
    }
}

/// Runs one fetch in the background and reports its outcome.
///
/// Earlier fetches are not cancelled; the reducer decides what a late
/// result does.
fn spawn_search(app: &App, seq: u64, query: String, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch seq={} query={:?}", seq, query);
    let catalog = app.catalog.clone();
    let recorder = app.recorder.clone();
    tokio::spawn(async move {
        let outcome = fetch_movies(catalog.as_ref(), &recorder, &query).await;
        if tx.send(Action::SearchFinished { seq, outcome }).is_err() {
            warn!("Failed to send result for seq={}: receiver dropped", seq);
        }
    });
}

fn spawn_trending_load(app: &App, tx: mpsc::Sender<Action>) {
    debug!("Spawning trending load");
    let recorder = app.recorder.clone();
    tokio::spawn(async move {
        let entries = recorder.load_trending().await;
        if tx.send(Action::TrendingLoaded(entries)).is_err() {
            warn!("Failed to send trending entries: receiver dropped");
        }
    });
}
