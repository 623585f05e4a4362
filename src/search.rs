//! Header search box state.
//!
//! Enter submits the query (surfaced as an info toast; there is no search
//! backend). While typing, edits feed a 300 ms debouncer whose firing
//! stands in for a suggestion fetch and is logged at debug level.

use std::time::{Duration, Instant};

use crate::timing::Debouncer;

/// Quiet period before a suggestion lookup would fire.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries at or below this length never trigger suggestions.
pub const MIN_SUGGEST_LEN: usize = 2;

#[derive(Debug)]
pub struct SearchState {
    pub query: String,
    suggest: Debouncer<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            suggest: Debouncer::new(SUGGEST_DEBOUNCE),
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an edit to the query and restart the suggestion window.
    /// Short queries cancel any pending lookup instead.
    pub fn edited(&mut self, now: Instant) {
        let trimmed = self.query.trim();
        if trimmed.chars().count() > MIN_SUGGEST_LEN {
            self.suggest.call(trimmed.to_string(), now);
        } else {
            self.suggest.cancel();
        }
    }

    /// The debounced suggestion query, once typing has paused.
    pub fn poll_suggestion(&mut self, now: Instant) -> Option<String> {
        self.suggest.poll(now)
    }

    /// Take the submitted query, if non-empty, and clear the box.
    pub fn submit(&mut self) -> Option<String> {
        let query = self.query.trim().to_string();
        self.query.clear();
        self.suggest.cancel();
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_do_not_suggest() {
        let now = Instant::now();
        let mut search = SearchState::new();
        search.query = "ab".into();
        search.edited(now);
        assert_eq!(search.poll_suggestion(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_suggestion_fires_after_pause() {
        let now = Instant::now();
        let mut search = SearchState::new();
        search.query = "rus".into();
        search.edited(now);
        search.query = "rust".into();
        search.edited(now + Duration::from_millis(100));

        assert_eq!(search.poll_suggestion(now + Duration::from_millis(350)), None);
        assert_eq!(
            search.poll_suggestion(now + Duration::from_millis(400)),
            Some("rust".to_string())
        );
    }

    #[test]
    fn test_submit_trims_and_clears() {
        let mut search = SearchState::new();
        search.query = "  zero days  ".into();
        assert_eq!(search.submit(), Some("zero days".to_string()));
        assert!(search.query.is_empty());

        search.query = "   ".into();
        assert_eq!(search.submit(), None);
    }
}
