//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, tagline, status
//! - `TrendingStrip`: ranked trending searches, hidden when empty
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: the raw search text, emits `SearchEvent`
//! - `MovieList`: spinner / error / cards, scroll state in `MovieListState`
//!
//! Components receive external data as props (fields or constructor
//! arguments), never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top line)
//! ├── search_box.rs      (text input)
//! ├── trending_strip.rs  (trending searches)
//! └── movie_list.rs      (results area)
//! ```

pub mod movie_list;
pub mod search_box;
pub mod title_bar;
pub mod trending_strip;

pub use movie_list::{MovieList, MovieListState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
pub use trending_strip::TrendingStrip;
