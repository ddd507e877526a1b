//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::SearchError;
use super::query::ValidationError;
use super::song::Song;
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub async fn get_query(&self) -> String {
        self.ui_state.lock().await.query.clone()
    }

    pub async fn append_to_query(&self, c: char) {
        self.ui_state.lock().await.push_char(c);
    }

    pub async fn backspace_query(&self) {
        self.ui_state.lock().await.pop_char();
    }

    pub async fn update_query(&self, query: String) {
        self.ui_state.lock().await.set_query(query);
    }

    pub async fn is_search_enabled(&self) -> bool {
        self.ui_state.lock().await.search_enabled
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    /// Enter Loading for a new search and return its sequence number
    pub async fn begin_search(&self) -> u64 {
        let mut state = self.ui_state.lock().await;
        state.request_seq += 1;
        state.show_loading();
        state.request_seq
    }

    /// Apply the outcome of search `seq`. Returns false if a newer search
    /// has started since, in which case the outcome is dropped.
    pub async fn finish_search(&self, seq: u64, outcome: Result<Vec<Song>, SearchError>) -> bool {
        let mut state = self.ui_state.lock().await;
        if seq != state.request_seq {
            tracing::debug!(seq, latest = state.request_seq, "Discarding stale search response");
            return false;
        }

        match outcome {
            Ok(songs) => state.show_results(songs),
            Err(e) => {
                tracing::warn!(seq, kind = e.kind(), error = %e, "Search failed");
                state.show_error(e.user_message());
            }
        }
        true
    }

    /// Show a validation failure. Any search still in flight is superseded.
    pub async fn reject_query(&self, error: &ValidationError) {
        let mut state = self.ui_state.lock().await;
        state.request_seq += 1;
        state.show_error(error.to_string());
    }

    // ========================================================================
    // Results scrolling
    // ========================================================================

    pub async fn scroll_results_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.results_scroll = state.results_scroll.saturating_sub(1);
    }

    pub async fn scroll_results_down(&self) {
        let mut state = self.ui_state.lock().await;
        let count = state.search.songs().len();
        if state.results_scroll + 1 < count {
            state.results_scroll += 1;
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{rank, CATALOG};
    use crate::model::types::{Panel, SearchState};
    use crate::model::Query;

    #[tokio::test]
    async fn successful_search_shows_results() {
        let model = AppModel::new();
        let seq = model.begin_search().await;
        assert_eq!(model.get_ui_state().await.panel(), Panel::Loading);

        assert!(model.finish_search(seq, Ok(rank("love", CATALOG))).await);

        let state = model.get_ui_state().await;
        assert_eq!(state.panel(), Panel::Results);
        assert_eq!(state.search.songs().len(), 5);
    }

    #[tokio::test]
    async fn empty_result_list_is_not_an_error() {
        let model = AppModel::new();
        let seq = model.begin_search().await;
        model.finish_search(seq, Ok(vec![])).await;

        let state = model.get_ui_state().await;
        assert_eq!(state.search, SearchState::Results(vec![]));
    }

    #[tokio::test]
    async fn failures_show_the_generic_message() {
        let model = AppModel::new();
        let seq = model.begin_search().await;
        model.finish_search(seq, Err(SearchError::Provider { status: 503 })).await;

        let state = model.get_ui_state().await;
        assert_eq!(
            state.search,
            SearchState::Error("Failed to search for music. Please try again.".to_string())
        );
    }

    #[tokio::test]
    async fn stale_completions_are_dropped() {
        let model = AppModel::new();
        let first = model.begin_search().await;
        let second = model.begin_search().await;
        assert!(second > first);

        assert!(model.finish_search(second, Ok(rank("Nirvana", CATALOG))).await);
        assert!(!model.finish_search(first, Err(SearchError::InvalidResponse("late".into()))).await);

        let state = model.get_ui_state().await;
        assert_eq!(state.search.songs()[0].title, "Smells Like Teen Spirit");
    }

    #[tokio::test]
    async fn validation_error_supersedes_pending_search() {
        let model = AppModel::new();
        let seq = model.begin_search().await;

        let err = Query::parse("ab").unwrap_err();
        model.reject_query(&err).await;
        assert!(!model.finish_search(seq, Ok(vec![])).await);

        let state = model.get_ui_state().await;
        assert_eq!(
            state.search,
            SearchState::Error("Please enter at least 3 characters to search.".to_string())
        );
    }

    #[tokio::test]
    async fn scrolling_is_clamped_and_reset_by_new_results() {
        let model = AppModel::new();
        let seq = model.begin_search().await;
        model.finish_search(seq, Ok(rank("rock", CATALOG))).await;

        model.scroll_results_up().await;
        assert_eq!(model.get_ui_state().await.results_scroll, 0);

        for _ in 0..10 {
            model.scroll_results_down().await;
        }
        assert_eq!(model.get_ui_state().await.results_scroll, 4);

        let seq = model.begin_search().await;
        model.finish_search(seq, Ok(rank("queen", CATALOG))).await;
        assert_eq!(model.get_ui_state().await.results_scroll, 0);
    }
}
