// Summary cards
//
// Row of headline numbers shared by the home and dashboard views.

use super::formatters::format_number;
use crate::satellites::Summary;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the card row needs, borders included
pub const HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect, summary: &Summary, loading: bool, theme: &Theme) {
    let value = |n: usize| {
        if loading {
            "…".to_string()
        } else {
            format_number(n as u64)
        }
    };

    let cards = [
        ("Total Satellites", value(summary.total), theme.chart_primary),
        ("Active Missions", value(summary.active), theme.active),
        ("Orbit Types", value(summary.orbit_types), theme.chart_secondary),
        ("Monitoring", "24/7".to_string(), theme.highlight),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, number, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        render_card(f, *chunk, label, number, color, theme);
    }
}

fn render_card(f: &mut Frame, area: Rect, label: &str, number: String, color: Color, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            number,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.muted))),
    ];

    let card = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(card, area);
}
