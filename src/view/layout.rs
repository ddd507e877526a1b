//! Layout rendering (search bar, search button, footer)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, UiState};

const PLACEHOLDER: &str = "Enter lyrics or song name to search...";
const FOCUSED_PLACEHOLDER: &str = "Try: love, dream, night, music...";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// The end of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    let overflow = text.chars().count().saturating_sub(width);
    match text.char_indices().nth(overflow) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(12), // Search button
        ])
        .split(area);

    let input_focused = ui_state.active_section == ActiveSection::Input;
    // Long queries scroll so the end being typed stays in view
    let shown = visible_tail(&ui_state.query, chunks[0].width.saturating_sub(4) as usize);

    let (text, text_style) = if ui_state.query.is_empty() {
        let hint = if input_focused { FOCUSED_PLACEHOLDER } else { PLACEHOLDER };
        (hint, Style::default().fg(Color::DarkGray))
    } else {
        (shown, Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lyrics, song, artist or genre ")
            .padding(Padding::horizontal(1))
            .border_style(focus_style(input_focused)),
    );
    frame.render_widget(input, chunks[0]);

    if input_focused {
        // border + padding on the left
        let typed = shown.chars().count() as u16;
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let x = (chunks[0].x + 2 + typed).min(max_x);
        frame.set_cursor_position((x, chunks[0].y + 1));
    }

    let label_style = if ui_state.search_enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new("Search")
        .style(label_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(ui_state.active_section == ActiveSection::Button)),
        );
    frame.render_widget(button, chunks[1]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hints: &[(&str, &str)] = match ui_state.active_section {
        ActiveSection::Input => &[("Enter", "search"), ("Esc", "clear"), ("Tab", "focus"), ("Ctrl+C", "quit")],
        ActiveSection::Button => &[("Enter", "search"), ("Tab", "focus"), ("Ctrl+K", "input"), ("Q", "quit")],
        ActiveSection::Results => &[("↑/↓", "scroll"), ("Tab", "focus"), ("Ctrl+K", "input"), ("Q", "quit")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {}", action)));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
