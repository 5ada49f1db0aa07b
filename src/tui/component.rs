use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into a region of the frame.
///
/// Data comes in as props (struct fields). `render` takes `&mut self` so a
/// component can update presentation state such as scroll offsets or cached
/// heights while it draws, the way ratatui's `StatefulWidget` does.
pub trait Component {
    /// Draw into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// What the component reports back to the event loop.
    type Event;

    /// Handle a `TuiEvent`, optionally emitting a higher-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
