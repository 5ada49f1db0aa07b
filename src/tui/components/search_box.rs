//! # SearchBox Component
//!
//! Single-line text field holding the raw, not yet debounced, search text.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete, cursor movement)
//! - Report every change so the parent can feed the debouncer
//! - Report Enter so the parent can commit immediately
//! - Scroll horizontally when the text is wider than the box
//!
//! Pasted newlines become spaces: a search term is one line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search through thousands of movies";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The text changed; carries the full new text.
    Changed(String),
    /// Enter pressed.
    Submit,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Replace the text and put the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = single_line(text);
        self.cursor = self.buffer.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// Byte offset of the first visible character so the cursor stays inside
    /// `inner_width` columns.
    fn visible_start(&self, inner_width: u16) -> usize {
        let inner_width = inner_width as usize;
        if inner_width == 0 {
            return self.cursor;
        }
        let mut start = 0;
        while start < self.cursor && self.buffer[start..self.cursor].width() >= inner_width {
            start = next_char_boundary(&self.buffer, start);
        }
        start
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title("Search");

        let inner_width = area.width.saturating_sub(2);
        let start = self.visible_start(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(&self.buffer[start..]).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        let cursor_col = self.buffer[start..self.cursor].width() as u16;
        let cursor_x = (area.x + 1 + cursor_col).min(area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let c = if *c == '\n' { ' ' } else { *c };
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::ClearInput => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.cursor = 0;
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            _ => None,
        }
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Byte offset of the character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> SearchBox {
        let mut input = SearchBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    fn rendered(input: &mut SearchBox, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_typing_reports_full_text() {
        let mut input = SearchBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('b')),
            Some(SearchEvent::Changed("b".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(SearchEvent::Changed("ba".to_string()))
        );
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("b".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = SearchBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = typed("amélie");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "amlie");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "mlie");
        assert_eq!(input.cursor(), 0);

        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.cursor(), input.buffer.len());
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = SearchBox::new();
        let event = input.handle_event(&TuiEvent::Paste("the\ngodfather".to_string()));
        assert_eq!(event, Some(SearchEvent::Changed("the godfather".to_string())));
    }

    #[test]
    fn test_clear_input() {
        let mut input = typed("heat");
        assert_eq!(
            input.handle_event(&TuiEvent::ClearInput),
            Some(SearchEvent::Changed(String::new()))
        );
        assert_eq!(input.handle_event(&TuiEvent::ClearInput), None);
    }

    #[test]
    fn test_submit_keeps_text() {
        let mut input = typed("heat");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(SearchEvent::Submit));
        assert_eq!(input.buffer, "heat");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = SearchBox::new();
        input.set_text("blade runner");
        assert_eq!(input.cursor(), "blade runner".len());
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut input = SearchBox::new();
        let text = rendered(&mut input, 50);
        assert!(text.contains("Search"));
        assert!(text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_scrolls_long_text() {
        let mut input = typed("the lord of the rings the return of the king");
        let text = rendered(&mut input, 20);
        assert!(text.contains("king"));
        assert!(!text.contains("the lord"));
    }
}
