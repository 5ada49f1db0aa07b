//! # MovieList Component
//!
//! The "All Movies" section. Shows exactly one of:
//!
//! 1. a spinner while a fetch is in flight
//! 2. the error message when the last fetch failed
//! 3. the movie cards (or "No movies found.")
//!
//! The choice is a `match` on `SearchState`, so two of them can never show at once.
//!
//! `MovieList` is transient (built each frame) and wraps the persistent
//! `&mut MovieListState` plus the search state as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::Movie;
use crate::core::state::SearchState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Two content lines plus top and bottom border.
pub const CARD_HEIGHT: u16 = 4;

pub const EMPTY_MESSAGE: &str = "No movies found.";

/// Scroll state for the movie list. Persisted in `TuiState`.
#[derive(Default)]
pub struct MovieListState {
    pub scroll_state: ScrollViewState,
}

impl MovieListState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for MovieListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

pub struct MovieList<'a> {
    pub state: &'a mut MovieListState,
    pub search: &'a SearchState,
    pub image_base_url: &'a str,
    pub spinner_frame: usize,
}

impl<'a> MovieList<'a> {
    pub fn new(
        state: &'a mut MovieListState,
        search: &'a SearchState,
        image_base_url: &'a str,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            search,
            image_base_url,
            spinner_frame,
        }
    }

    fn render_spinner(&self, frame: &mut Frame, area: Rect, query: &str) {
        let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let label = if query.is_empty() {
            "Loading popular movies...".to_string()
        } else {
            format!("Searching for \"{query}\"...")
        };
        let line = Line::from(vec![
            Span::styled(glyph, Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::Gray)),
        ]);
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }

    fn render_error(frame: &mut Frame, area: Rect, message: &str) {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_movies(&mut self, frame: &mut Frame, area: Rect, movies: &[Movie]) {
        if movies.is_empty() {
            let paragraph = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        }

        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let content_height = CARD_HEIGHT.saturating_mul(movies.len() as u16);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, movie) in movies.iter().enumerate() {
            let card_area = Rect::new(0, index as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            scroll_view.render_widget(movie_card(movie, self.image_base_url), card_area);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                "All Movies",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let search = self.search;
        match search {
            SearchState::Loading { query } => self.render_spinner(frame, inner, query),
            SearchState::Failed { message } => Self::render_error(frame, inner, message),
            SearchState::Loaded { movies } => self.render_movies(frame, inner, movies),
        }
    }
}

/// One movie as a bordered card:
///
/// ```text
/// ╭ The Dark Knight ───────────────────╮
/// │★ 8.5 • en • 2008                   │
/// │poster: https://image.tmdb.org/...  │
/// ╰────────────────────────────────────╯
/// ```
fn movie_card<'a>(movie: &'a Movie, image_base_url: &str) -> Paragraph<'a> {
    let title = if movie.title.is_empty() {
        "Untitled"
    } else {
        movie.title.as_str()
    };

    let mut facts = vec![
        Span::styled("★ ", Style::default().fg(Color::Yellow)),
        Span::raw(movie.rating_label()),
    ];
    facts.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
    facts.push(Span::raw(
        movie.original_language.clone().unwrap_or_else(|| "N/A".to_string()),
    ));
    facts.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
    facts.push(Span::raw(
        movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
    ));

    let poster = match movie.poster_url(image_base_url) {
        Some(url) => Line::from(Span::styled(
            format!("poster: {url}"),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "no poster",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    Paragraph::new(vec![Line::from(facts), poster]).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movie;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(search: &SearchState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MovieListState::new();
        terminal
            .draw(|f| {
                MovieList::new(&mut state, search, "https://img.test/w500", 0).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        let text = rendered(
            &SearchState::Loading {
                query: "batman".to_string(),
            },
            60,
            10,
        );
        assert!(text.contains("All Movies"));
        assert!(text.contains("Searching for \"batman\"..."));
        assert!(text.contains(SPINNER_FRAMES[0]));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_loading_default_listing_label() {
        let text = rendered(
            &SearchState::Loading {
                query: String::new(),
            },
            60,
            10,
        );
        assert!(text.contains("Loading popular movies..."));
    }

    #[test]
    fn test_failed_shows_only_error() {
        let text = rendered(
            &SearchState::Failed {
                message: "Failed to fetch movies.".to_string(),
            },
            60,
            10,
        );
        assert!(text.contains("Failed to fetch movies."));
        assert!(!text.contains("Searching"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_loaded_empty_shows_placeholder() {
        let text = rendered(&SearchState::Loaded { movies: Vec::new() }, 60, 10);
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_loaded_shows_cards() {
        let search = SearchState::Loaded {
            movies: vec![movie(155, "The Dark Knight"), movie(272, "Batman Begins")],
        };
        let text = rendered(&search, 70, 12);
        assert!(text.contains("The Dark Knight"));
        assert!(text.contains("Batman Begins"));
        assert!(text.contains("★ 7.5 • en • 2008"));
        assert!(text.contains("poster: https://img.test/w500/155.jpg"));
    }

    #[test]
    fn test_scroll_events_handled() {
        let mut state = MovieListState::new();
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(()));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }
}
