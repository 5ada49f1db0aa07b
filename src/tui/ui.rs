use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MovieList, TitleBar, TrendingStrip};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draws one frame.
///
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ title bar                       (1 row)  │
/// │ search box                      (3 rows) │
/// │ trending strip     (0 rows when empty)   │
/// │ all movies                   (the rest)  │
/// └──────────────────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let mut trending = TrendingStrip::new(&app.trending);
    let layout = Layout::vertical([Length(1), Length(3), Length(trending.height()), Min(0)]);
    let [title_area, search_area, trending_area, movies_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);
    tui.search_box.render(frame, search_area);
    trending.render(frame, trending_area);
    MovieList::new(
        &mut tui.movie_list,
        &app.search,
        &app.image_base_url,
        spinner_frame,
    )
    .render(frame, movies_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SearchState;
    use crate::test_support::{movie, test_app};
    use crate::trending::TrendingEntry;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, 0))
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
    fn test_no_trending_section_when_list_empty() {
        let mut app = test_app();
        app.search = SearchState::Loaded {
            movies: vec![movie(1, "Heat")],
        };
        let text = rendered(&app);
        assert!(!text.contains("Trending Movies"));
        assert!(text.contains("All Movies"));
        assert!(text.contains("Heat"));
    }

    #[test]
    fn test_trending_section_shown_when_present() {
        let mut app = test_app();
        app.trending = vec![TrendingEntry {
            id: "a".to_string(),
            search_term: "batman".to_string(),
            count: 3,
            movie_id: Some(155),
            poster_url: None,
            title: Some("The Dark Knight".to_string()),
        }];
        let text = rendered(&app);
        assert!(text.contains("Trending Movies"));
        assert!(text.contains(" 1 The Dark Knight"));
    }

    #[test]
    fn test_loading_hides_error_and_list() {
        let mut app = test_app();
        app.search = SearchState::Loading {
            query: "heat".to_string(),
        };
        let text = rendered(&app);
        assert!(text.contains("Searching for \"heat\"..."));
        assert!(!text.contains("No movies found."));
    }

    #[test]
    fn test_error_replaces_list() {
        let mut app = test_app();
        app.search = SearchState::Failed {
            message: "Invalid API key".to_string(),
        };
        let text = rendered(&app);
        assert!(text.contains("Invalid API key"));
        assert!(!text.contains("No movies found."));
        assert!(!text.contains("Searching"));
    }

    #[test]
    fn test_title_bar_shows_status() {
        let mut app = test_app();
        app.status_message = "20 movies".to_string();
        let text = rendered(&app);
        assert!(text.contains("Reel"));
        assert!(text.contains("20 movies"));
    }
}
