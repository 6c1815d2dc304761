// Status bar component
//
// Bottom line: connection state, record count, last update, uptime and the
// key hints for the active view.

use super::formatters::format_last_updated;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::router::View;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn view_hints(view: View, search_mode: bool) -> &'static str {
    if search_mode {
        return "type to search │ Enter done │ Esc clear";
    }
    match view {
        View::Home => "Enter dashboard │ r refresh",
        View::Dashboard => "←/→ metric │ r refresh",
        View::History => "/ search │ o/s filter │ c clear │ 1-4 sort │ ←/→ page",
        View::Videos => "↑/↓ or 1-4 feed │ y copy URL",
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: Full format with labels
/// - Narrow: Compact format
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let snapshot = app.snapshot();
    let bp = Breakpoint::from_width(area.width);

    let (link, link_color) = if snapshot.loading {
        ("● syncing", theme.highlight)
    } else if snapshot.error.is_some() {
        ("● offline", theme.error)
    } else if snapshot.last_updated.is_some() {
        ("● connected", theme.active)
    } else {
        ("○ idle", theme.muted)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", link), Style::default().fg(link_color)),
        Span::raw(format!("│ 🛰 {} ", snapshot.satellites.len())),
    ];

    if bp.at_least(Breakpoint::Wide) {
        spans.push(Span::raw(format!(
            "│ updated {} │ up {} ",
            format_last_updated(snapshot.last_updated),
            app.uptime()
        )));
    }

    spans.push(Span::styled(
        format!("│ {} │ Tab views │ t theme │ q quit", view_hints(app.view(), app.search_mode)),
        Style::default().fg(theme.muted),
    ));

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(theme.border)));

    f.render_widget(status, area);
}
