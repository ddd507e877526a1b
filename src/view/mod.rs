//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Rendering is a pure function of a [`UiState`] snapshot; nothing here mutates state.
//!
//! - `utils`: Shared helpers (truncation, centering)
//! - `layout`: Search bar, search button and footer
//! - `panels`: The welcome, loading, results and error panels
//! - `card`: Song card template

mod utils;
mod layout;
mod panels;
mod card;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Panel, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input + button
                Constraint::Min(0),    // Active panel
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state);

        match ui_state.panel() {
            Panel::Welcome => panels::render_welcome(frame, chunks[1]),
            Panel::Loading => panels::render_loading(frame, chunks[1]),
            Panel::Results => panels::render_results(frame, chunks[1], ui_state),
            Panel::Error => panels::render_error(frame, chunks[1], ui_state),
        }

        layout::render_footer(frame, chunks[2], ui_state);
    }
}
