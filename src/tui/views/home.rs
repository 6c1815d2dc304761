// Home view - landing page
//
// Headline numbers plus a system status panel. Enter jumps to the dashboard.

use crate::satellites::Summary;
use crate::tui::app::App;
use crate::tui::components::formatters::format_last_updated;
use crate::tui::components::summary_cards;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(summary_cards::HEIGHT),
            Constraint::Min(4),
        ])
        .split(area);

    // Hero
    let hero = vec![
        Line::from(Span::styled(
            "Mission Board Dashboard",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Real-time satellite tracking and mission management. Monitor orbital assets, \
             track mission progress, and analyze space operations data.",
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            "Enter view dashboard  •  r refresh data",
            Style::default().fg(theme.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let summary = Summary::of(&snapshot.satellites);
    summary_cards::render(f, chunks[1], &summary, snapshot.loading, theme);

    // System status
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" System Status ");

    let status = match &snapshot.error {
        Some(error) => vec![Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(theme.error),
        ))],
        None => {
            let row = |label: &str, value: String, color: Color| {
                Line::from(vec![
                    Span::styled(format!("{:<18}", label), Style::default().fg(theme.muted)),
                    Span::styled(value, Style::default().fg(color)),
                ])
            };
            let connection = if snapshot.loading {
                ("Syncing…".to_string(), theme.highlight)
            } else {
                ("Connected".to_string(), theme.active)
            };
            vec![
                row("Data Connection", connection.0, connection.1),
                row("Last Update", format_last_updated(snapshot.last_updated), theme.chart_primary),
                row("API Endpoint", app.client().satellites_url(), theme.foreground),
                row("Tracking Mode", "Real-time".to_string(), theme.highlight),
                row("Mission Status", "Operational".to_string(), theme.active),
            ]
        }
    };

    f.render_widget(
        Paragraph::new(status).block(block).wrap(Wrap { trim: true }),
        chunks[2],
    );
}
