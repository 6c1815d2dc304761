// Title bar component
//
// App name, view tabs, loading spinner and the mission clock.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::router::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(if bp.at_least(Breakpoint::Normal) { 17 } else { 3 }),
            Constraint::Min(10),
            Constraint::Length(16),
        ])
        .split(inner);

    // Brand
    let brand = if bp.at_least(Breakpoint::Normal) {
        " 🛰 Mission Board"
    } else {
        " 🛰"
    };
    f.render_widget(
        Paragraph::new(brand).style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[0],
    );

    // Tabs
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| {
            if bp.at_least(Breakpoint::Wide) {
                Line::from(format!("F{} {}", v.hotkey(), v.name()))
            } else {
                Line::from(v.name())
            }
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view().index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, chunks[1]);

    // Spinner + clock
    let mut right = Vec::new();
    if app.snapshot().loading {
        right.push(Span::styled(
            format!("{} ", app.spinner_char()),
            Style::default().fg(theme.highlight),
        ));
    }
    right.push(Span::styled(app.clock.now(), Style::default().fg(theme.foreground)));
    f.render_widget(Paragraph::new(Line::from(right).right_aligned()), chunks[2]);
}
