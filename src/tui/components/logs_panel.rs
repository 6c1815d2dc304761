//! Logs panel component
//!
//! Tail of the in-memory log buffer, newest at the bottom, color-coded by
//! level. Toggled with `l`.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry for display
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    let color = match level {
        LogLevel::Error => theme.log_error,
        LogLevel::Warn => theme.log_warn,
        LogLevel::Info => theme.log_info,
        LogLevel::Debug | LogLevel::Trace => theme.log_debug,
    };
    Style::default().fg(color)
}

pub struct LogsPanel;

impl LogsPanel {
    pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" System Logs "),
        );

        f.render_widget(list, area);
    }

    /// Entries that fit inside `area` (borders excluded)
    pub fn capacity(area: Rect) -> usize {
        area.height.saturating_sub(2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            level: LogLevel::Info,
            message: "Loaded 12 satellites".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[12:30:00] INFO  Loaded 12 satellites");
    }

    #[test]
    fn capacity_excludes_borders() {
        assert_eq!(LogsPanel::capacity(Rect::new(0, 0, 80, 8)), 6);
        assert_eq!(LogsPanel::capacity(Rect::new(0, 0, 80, 1)), 0);
    }
}
