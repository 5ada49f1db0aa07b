//! # TitleBar Component
//!
//! Top line: app name, tagline, and the current status.
//!
//! Stateless: it receives all data as props and has no internal state.
//!
//! ```text
//! Reel | Find Movies You'll Enjoy Without the Hassle | 20 movies
//! ```
//!
//! The status segment is dropped when empty. On narrow terminals the line is
//! simply cut off at the right edge, so the app name always stays visible.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const TAGLINE: &str = "Find Movies You'll Enjoy Without the Hassle";

pub struct TitleBar {
    /// Status message (e.g., "Searching...", "20 movies")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled(
                "Reel",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::raw(TAGLINE),
        ];
        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
