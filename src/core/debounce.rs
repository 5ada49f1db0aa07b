//! # Debouncer
//!
//! Collapses a burst of input changes into one committed value.
//!
//! ```text
//! input:   b   ba  bat ......................... batm  batma  batman ..........
//! commit:                  ▲ "bat" (quiet elapsed)                         ▲ "batman"
//! ```
//!
//! Every `input()` restarts the quiet period. Only the latest value is kept.
//! Time is passed in by the caller, so nothing here sleeps or spawns.

use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replaces any pending value and restarts the quiet period at `now`.
    pub fn input(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Publishes the pending value once it has been stable for the quiet period.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Publishes the pending value right away.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    /// When the pending value will be published, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_pending_publishes_nothing() {
        let mut d = Debouncer::default();
        assert!(d.poll(Instant::now()).is_none());
        assert!(d.deadline().is_none());
        assert!(!d.is_pending());
    }

    #[test]
    fn test_publishes_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.input("bat".to_string(), t0);

        assert!(d.poll(t0 + ms(499)).is_none());
        assert_eq!(d.poll(t0 + ms(500)), Some("bat".to_string()));
        // Published once only
        assert!(d.poll(t0 + ms(900)).is_none());
    }

    #[test]
    fn test_rapid_inputs_collapse_to_last() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));
        let mut published = Vec::new();

        let keystrokes = ["b", "ba", "bat", "batm", "batma", "batman"];
        for (i, text) in keystrokes.iter().enumerate() {
            let at = t0 + ms(40 * i as u64);
            d.input(text.to_string(), at);
            published.extend(d.poll(at + ms(10)));
        }
        for step in 0..100 {
            published.extend(d.poll(t0 + ms(200 + step * 10)));
        }

        assert_eq!(published, vec!["batman".to_string()]);
    }

    #[test]
    fn test_new_input_restarts_timer() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.input("a".to_string(), t0);
        d.input("ab".to_string(), t0 + ms(400));

        assert!(d.poll(t0 + ms(600)).is_none());
        assert_eq!(d.deadline(), Some(t0 + ms(900)));
        assert_eq!(d.poll(t0 + ms(900)), Some("ab".to_string()));
    }

    #[test]
    fn test_flush_publishes_immediately() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(500));
        d.input("heat".to_string(), t0);

        assert_eq!(d.flush(), Some("heat".to_string()));
        assert!(!d.is_pending());
        assert!(d.poll(t0 + ms(1000)).is_none());
        assert!(d.flush().is_none());
    }
}
