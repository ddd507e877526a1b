//! Core type definitions for the application

use super::query::can_submit;
use super::song::Song;

/// Which part of the UI currently has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Input,
    Button,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Input => ActiveSection::Button,
            ActiveSection::Button => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Input => ActiveSection::Results,
            ActiveSection::Button => ActiveSection::Input,
            ActiveSection::Results => ActiveSection::Button,
        }
    }
}

/// The panel occupying the main area. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Welcome,
    Loading,
    Results,
    Error,
}

/// Lifecycle of the current search
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Results(Vec<Song>),
    Error(String),
}

impl SearchState {
    pub fn panel(&self) -> Panel {
        match self {
            SearchState::Idle => Panel::Welcome,
            SearchState::Loading => Panel::Loading,
            SearchState::Results(_) => Panel::Results,
            SearchState::Error(_) => Panel::Error,
        }
    }

    pub fn songs(&self) -> &[Song] {
        match self {
            SearchState::Results(songs) => songs,
            _ => &[],
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub query: String,
    pub search_enabled: bool,
    pub search: SearchState,
    pub results_scroll: usize,
    /// Sequence number of the most recent search; older completions are dropped
    pub request_seq: u64,
}

impl UiState {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.refresh_search_enabled();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_search_enabled();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refresh_search_enabled();
    }

    fn refresh_search_enabled(&mut self) {
        self.search_enabled = can_submit(&self.query);
    }

    pub fn show_loading(&mut self) {
        self.search = SearchState::Loading;
    }

    pub fn show_results(&mut self, songs: Vec<Song>) {
        self.results_scroll = 0;
        self.search = SearchState::Results(songs);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.search = SearchState::Error(message.into());
    }

    pub fn panel(&self) -> Panel {
        self.search.panel()
    }
}
