// Error banner component
//
// Shown above the active view while the store holds an error. `r` retries,
// `x` dismisses; neither blocks navigation.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the banner needs, borders included
pub const HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            format!("⚠ {}", message),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "r retry  •  x dismiss",
            Style::default().fg(theme.muted),
        )),
    ];

    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.error))
            .title(" Error "),
    );

    f.render_widget(banner, area);
}
