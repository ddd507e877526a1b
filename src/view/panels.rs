//! Main area panels: welcome, loading, results and error

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, SearchState, UiState};
use super::card::{card_height, render_card};
use super::utils::centered_rect;

/// Cards narrower than this are not laid out side by side
const MIN_CARD_WIDTH: u16 = 44;

pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("Welcome to lyricfinder").style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Type a lyric fragment, a song title, an artist or a genre"),
        Line::from("and press Enter to get song recommendations."),
        Line::from(""),
        Line::from("Queries need at least 3 characters."),
        Line::from("Tab moves between the input, the button and the results."),
    ];

    let welcome = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).padding(Padding::uniform(1)));
    frame.render_widget(welcome, area);
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Searching ")
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let loading = Paragraph::new("Searching for music...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(loading, centered_rect(inner, inner.width, 1));
}

pub fn render_error(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let message = match &ui_state.search {
        SearchState::Error(message) => message.as_str(),
        _ => "",
    };

    let text = vec![
        Line::from(message.to_string()).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Edit your query and press Enter to try again.").style(Style::default().fg(Color::DarkGray)),
    ];

    let error = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ")
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(error, area);
}

pub fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let songs = ui_state.search.songs();
    let border_style = if ui_state.active_section == ActiveSection::Results {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Recommendations ({}) ", songs.len()))
        .border_style(border_style);
    let grid = block.inner(area);
    frame.render_widget(block, area);

    if songs.is_empty() {
        let empty = Paragraph::new("No songs matched your search.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_rect(grid, grid.width, 1));
        return;
    }

    let columns: usize = if grid.width >= MIN_CARD_WIDTH * 2 { 2 } else { 1 };
    let card_width = grid.width / columns as u16;

    // Scroll by whole rows so the selected card is always in the top row
    let first = (ui_state.results_scroll / columns) * columns;
    let bottom = grid.y + grid.height;
    let mut y = grid.y;

    for (row, cards) in songs.get(first..).unwrap_or_default().chunks(columns).enumerate() {
        if y >= bottom {
            break;
        }
        // A row is as tall as its tallest card
        let row_height = cards
            .iter()
            .map(|song| card_height(song, card_width))
            .max()
            .unwrap_or_default();

        for (col, song) in cards.iter().enumerate() {
            let card_area = Rect {
                x: grid.x + col as u16 * card_width,
                y,
                width: card_width,
                height: row_height.min(bottom - y),
            };
            render_card(frame, card_area, song, first + row * columns + col);
        }
        y = y.saturating_add(row_height);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{rank, SearchState, UiState, CATALOG};
    use crate::view::testing::render_to_string;

    #[test]
    fn empty_results_render_a_message_not_an_error() {
        let mut state = UiState::default();
        state.show_results(vec![]);
        assert_eq!(state.search, SearchState::Results(vec![]));

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Recommendations (0)"));
        assert!(screen.contains("No songs matched your search."));
        assert!(!screen.contains("Error"));
    }

    #[test]
    fn cards_follow_result_order() {
        let mut state = UiState::default();
        state.show_results(rank("love", CATALOG));

        // single column so every title is on its own row
        let screen = render_to_string(&state, 60, 50);
        let positions: Vec<usize> = ["Bohemian Rhapsody", "Billie Jean", "Yesterday", "Imagine", "Smells Like Teen Spirit"]
            .iter()
            .map(|title| screen.find(title).unwrap_or_else(|| panic!("{title} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(screen.contains("Popularity: 95/100"));
    }

    #[test]
    fn half_width_cards_show_the_whole_lyric() {
        let mut state = UiState::default();
        state.show_results(rank("love", CATALOG));

        // two columns; each lyric wraps onto a second line
        let screen = render_to_string(&state, 100, 40);
        for tail in ["fantasy?\"", "movie scene\"", "seemed so far away\"", "easy if you try\"", "friends\""] {
            assert!(screen.contains(tail), "missing lyric tail {tail}:\n{screen}");
        }
    }

    #[test]
    fn scrolling_hides_leading_cards() {
        let mut state = UiState::default();
        state.show_results(rank("love", CATALOG));
        state.results_scroll = 2;

        let screen = render_to_string(&state, 60, 30);
        assert!(!screen.contains("Bohemian Rhapsody"));
        assert!(!screen.contains("Billie Jean"));
        assert!(screen.contains("3. Yesterday"));
    }

    #[test]
    fn error_panel_shows_the_message() {
        let mut state = UiState::default();
        state.show_error("Please enter at least 3 characters to search.");

        let screen = render_to_string(&state, 100, 20);
        assert!(screen.contains("Please enter at least 3 characters to search."));
        assert!(screen.contains("Edit your query and press Enter to try again."));
    }
}
