// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Home: landing page with headline numbers and system status
// - Dashboard: metric charts and the active satellite list
// - History: searchable, sortable, paginated satellite table
// - Videos: live feed catalog
//
// This module builds the shell around the active view.

mod dashboard;
mod history;
mod home;
mod videos;

use super::app::App;
use super::components::{self, error_banner, LogsPanel};
use super::layout::logs_height;
use super::router::View;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let error = app.snapshot().error.as_deref();
    let logs_rows = if app.show_logs {
        logs_height(f.area().height)
    } else {
        0
    };

    // Structure: title, [error], content, [logs], status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if error.is_some() { error_banner::HEIGHT } else { 0 }),
            Constraint::Min(8),
            Constraint::Length(logs_rows),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    if let Some(message) = error {
        error_banner::render(f, chunks[1], message, &app.theme);
    }

    let content = chunks[2];
    match app.view() {
        View::Home => home::render(f, content, app),
        View::Dashboard => dashboard::render(f, content, app),
        View::History => history::render(f, content, app),
        View::Videos => videos::render(f, content, app),
    }

    if logs_rows > 0 {
        let entries = app.log_buffer.recent(LogsPanel::capacity(chunks[3]));
        LogsPanel::render(f, chunks[3], &entries, &app.theme);
    }

    components::status_bar::render(f, chunks[4], app);

    // Toast goes on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
