//! Multi-token search over the stored records

use crate::state::DashboardState;

/// Case-insensitive AND filter.
///
/// Every whitespace-separated token of the query must occur as a plain
/// substring of an entry's haystack for the entry to stay visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    tokens: Vec<String>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(raw: &str) -> Self {
        let mut engine = Self::new();
        engine.set_query(raw);
        engine
    }

    pub fn set_query(&mut self, raw: &str) {
        self.tokens = raw
            .to_uppercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// `haystack` must already be uppercase
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }

    /// Recompute visibility of every entry, returning how many stay visible
    pub fn apply(&self, state: &mut DashboardState) -> usize {
        let mut visible = 0;
        for entry in state.entries_mut() {
            entry.visible = !self.is_active() || self.matches(&entry.view.haystack());
            if entry.visible {
                visible += 1;
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn state() -> DashboardState {
        let mut state = DashboardState::default();
        state.insert(Record {
            added_to_dashboard_time: 1,
            selenium_session_id: "A".into(),
            browser: "chrome".into(),
            platform: "windows".into(),
            test_status: "passed".into(),
            ..Default::default()
        });
        state.insert(Record {
            added_to_dashboard_time: 2,
            selenium_session_id: "B".into(),
            browser: "firefox".into(),
            platform: "linux".into(),
            test_status: "failed".into(),
            ..Default::default()
        });
        state
    }

    fn visible_ids(state: &DashboardState) -> Vec<String> {
        state.visible().map(|e| e.view.session_id.clone()).collect()
    }

    #[test]
    fn test_tokenize() {
        let engine = FilterEngine::with_query("  chrome   Win\tpassed ");
        assert_eq!(engine.tokens(), ["CHROME", "WIN", "PASSED"]);
        assert!(!FilterEngine::with_query("   ").is_active());
    }

    #[test]
    fn test_empty_query_shows_all() {
        let mut state = state();
        FilterEngine::with_query("firefox").apply(&mut state);
        assert_eq!(state.visible_count(), 1);

        let shown = FilterEngine::with_query("").apply(&mut state);
        assert_eq!(shown, 2);
        assert_eq!(state.visible_count(), state.len());
    }

    #[test]
    fn test_and_semantics() {
        let mut state = state();
        FilterEngine::with_query("CHROME PASSED").apply(&mut state);
        assert_eq!(visible_ids(&state), vec!["A"]);

        FilterEngine::with_query("CHROME FAILED").apply(&mut state);
        assert!(visible_ids(&state).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let mut state = state();
        FilterEngine::with_query("chrome").apply(&mut state);
        assert_eq!(visible_ids(&state), vec!["A"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut state = state();
        let engine = FilterEngine::with_query("linux");
        let first = engine.apply(&mut state);
        let ids = visible_ids(&state);
        let second = engine.apply(&mut state);
        assert_eq!(first, second);
        assert_eq!(ids, visible_ids(&state));
    }

    #[test]
    fn test_tokens_are_not_patterns() {
        let mut state = state();
        FilterEngine::with_query("chr.me").apply(&mut state);
        assert_eq!(state.visible_count(), 0);
        FilterEngine::with_query("*").apply(&mut state);
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn test_matches_part_of_test_name() {
        let mut state = state();
        state.insert(Record {
            added_to_dashboard_time: 3,
            selenium_session_id: "C".into(),
            test_name: "checkoutFlow".into(),
            timestamp: "10:00".into(),
            browser: "chrome".into(),
            ..Default::default()
        });

        let shown = FilterEngine::with_query("checkout").apply(&mut state);
        assert_eq!(shown, 1);
        assert_eq!(visible_ids(&state), vec!["C"]);

        FilterEngine::with_query("FLOW chrome").apply(&mut state);
        assert_eq!(visible_ids(&state), vec!["C"]);
    }

    #[test]
    fn test_absent_attribute_never_matches() {
        let mut state = DashboardState::default();
        state.insert(Record {
            browser: "chrome".into(),
            ..Default::default()
        });
        FilterEngine::with_query("UTC").apply(&mut state);
        assert_eq!(state.visible_count(), 0);
    }
}
