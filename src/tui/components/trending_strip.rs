//! # TrendingStrip Component
//!
//! Ranked list of the most searched terms. Stateless: all data comes in as props.
//!
//! Renders nothing at all when there are no entries, and `height()` is 0 in
//! that case, so the layout gives the strip no rows.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::trending::TrendingEntry;
use crate::tui::component::Component;

pub struct TrendingStrip<'a> {
    pub entries: &'a [TrendingEntry],
}

impl<'a> TrendingStrip<'a> {
    pub fn new(entries: &'a [TrendingEntry]) -> Self {
        Self { entries }
    }

    /// Rows needed: one per entry plus borders, or 0 when empty.
    pub fn height(&self) -> u16 {
        if self.entries.is_empty() {
            0
        } else {
            self.entries.len() as u16 + 2
        }
    }
}

impl Component for TrendingStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.entries.is_empty() || area.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:>2} ", index + 1),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.label(), Style::default().fg(Color::White)),
                ];
                if let Some(url) = entry.poster_url.as_deref() {
                    spans.push(Span::styled(
                        format!("  {url}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                "Trending Movies",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
