//! Reel library exports for testing

pub mod catalog;
pub mod core;
pub mod search;
pub mod trending;
pub mod tui;

#[cfg(test)]
pub mod test_support;
