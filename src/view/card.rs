//! Song card template

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{Release, Song};
use super::utils::truncate_string;

/// Border rows above and below the card text
const BORDER_ROWS: u16 = 2;
/// Border plus padding on the left and on the right
const SIDE_COLUMNS: u16 = 4;

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Project a song onto the card's text lines. Missing fields are left out.
pub fn card_lines(song: &Song) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("by {}", song.artist),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ))];

    if let Some(album) = &song.album {
        lines.push(detail("Album", album.clone()));
    }
    if let Some(release) = &song.release {
        let label = match release {
            Release::Year(_) => "Year",
            _ => "Released",
        };
        lines.push(detail(label, release.display()));
    }
    if !song.genre.is_empty() {
        lines.push(detail("Genre", song.genre.clone()));
    }
    lines.push(detail(song.score.label(), song.score.value()));
    if !song.lyrics_excerpt.is_empty() {
        lines.push(detail("Sample Lyrics", format!("\"{}\"", song.lyrics_excerpt)));
    }

    lines
}

fn card_body(song: &Song) -> Paragraph<'static> {
    Paragraph::new(card_lines(song)).wrap(Wrap { trim: true })
}

/// Rows a card of `width` columns needs to show every field unclipped, borders included
pub fn card_height(song: &Song, width: u16) -> u16 {
    let text_width = width.saturating_sub(SIDE_COLUMNS);
    let rows = u16::try_from(card_body(song).line_count(text_width)).unwrap_or(u16::MAX);
    rows.saturating_add(BORDER_ROWS)
}

pub fn render_card(frame: &mut Frame, area: Rect, song: &Song, index: usize) {
    let title_width = (area.width as usize).saturating_sub(10);
    let title = format!(" ♪ {}. {} ", index + 1, truncate_string(&song.title, title_width));

    let card = card_body(song)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(card, area);
}
