// History view - the satellite table
//
// Filter bar on top, the current page of the filter → sort → paginate pipeline
// in the middle, caption and page indicator below.

use crate::satellites::history::HistoryPage;
use crate::satellites::model::SatelliteRecord;
use crate::satellites::sort::{SortKey, SortSpec};
use crate::tui::app::App;
use crate::tui::components::formatters::format_mission_duration;
use crate::tui::layout::{history_columns, Breakpoint, HistoryColumn};
use crate::tui::theme::Theme;
use chrono::{NaiveDate, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let records = app.snapshot().satellites.as_slice();
    let page = app.history.view(records);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_filter_bar(f, chunks[0], app);
    render_table(f, chunks[1], app, &page);

    let footer = Line::from(vec![
        Span::styled(page.caption(), Style::default().fg(theme.muted)),
        Span::raw("   "),
        Span::styled(page_indicator(&page), Style::default().fg(theme.highlight)),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let criteria = app.history.criteria();

    let search_style = if app.search_mode {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
    } else {
        Style::default().fg(theme.foreground)
    };
    let cursor = if app.search_mode { "▏" } else { "" };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.muted)),
        Span::styled(format!("{}{}", criteria.search_text, cursor), search_style),
        Span::styled("   Orbit: ", Style::default().fg(theme.muted)),
        Span::styled(criteria.orbit_type.to_string(), Style::default().fg(theme.chart_primary)),
        Span::styled("   Status: ", Style::default().fg(theme.muted)),
        Span::styled(criteria.status.to_string(), Style::default().fg(theme.chart_secondary)),
    ]);

    let border = if app.search_mode {
        theme.highlight
    } else {
        theme.border
    };
    let title = if criteria.is_identity() {
        " Filters "
    } else {
        " Filters (c clear) "
    };
    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    f.render_widget(bar, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App, page: &HistoryPage) {
    let theme = &app.theme;
    let columns = history_columns(Breakpoint::from_width(area.width));
    let spec = app.history.sort_spec();
    let today = Utc::now().date_naive();

    let header = Row::new(columns.iter().map(|col| {
        Cell::from(header_label(*col, spec)).style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1);

    let rows = page
        .rows
        .iter()
        .map(|record| Row::new(columns.iter().map(move |col| cell(*col, record, today, theme))));

    let widths: Vec<Constraint> = columns.iter().map(|col| column_width(*col)).collect();

    let title = if app.snapshot().loading && app.snapshot().is_empty() {
        " Satellite History (loading…) "
    } else {
        " Satellite History "
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(title),
    );

    if page.rows.is_empty() && !app.snapshot().loading {
        let empty = Paragraph::new("No satellites match the current filters")
            .style(Style::default().fg(theme.muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.border))
                    .title(title),
            );
        f.render_widget(empty, area);
        return;
    }

    f.render_widget(table, area);
}

/// Column header with the sort key digit and, on the sorted column, an arrow
fn header_label(col: HistoryColumn, spec: SortSpec) -> String {
    let Some(key) = sort_key(col) else {
        return col.header().to_string();
    };
    let digit = SortKey::ALL.iter().position(|k| *k == key).unwrap_or(0) + 1;
    if spec.key == key {
        format!("{} {} [{}]", col.header(), spec.direction.arrow(), digit)
    } else {
        format!("{} [{}]", col.header(), digit)
    }
}

fn sort_key(col: HistoryColumn) -> Option<SortKey> {
    match col {
        HistoryColumn::Name => Some(SortKey::Name),
        HistoryColumn::OrbitType => Some(SortKey::OrbitType),
        HistoryColumn::LaunchDate => Some(SortKey::LaunchDate),
        HistoryColumn::Status => Some(SortKey::Status),
        HistoryColumn::Mission => None,
    }
}

fn column_width(col: HistoryColumn) -> Constraint {
    match col {
        HistoryColumn::Name => Constraint::Min(18),
        HistoryColumn::OrbitType => Constraint::Length(22),
        HistoryColumn::LaunchDate => Constraint::Length(16),
        HistoryColumn::Status => Constraint::Length(18),
        HistoryColumn::Mission => Constraint::Length(24),
    }
}

fn cell<'a>(
    col: HistoryColumn,
    record: &'a SatelliteRecord,
    today: NaiveDate,
    theme: &Theme,
) -> Cell<'a> {
    match col {
        HistoryColumn::Name => Cell::from(record.name.as_str()),
        HistoryColumn::OrbitType => Cell::from(record.orbit_type.as_str()),
        HistoryColumn::LaunchDate => Cell::from(record.launch_date.to_string()),
        HistoryColumn::Status => Cell::from(format!("● {}", record.status))
            .style(Style::default().fg(theme.status_color(&record.status))),
        HistoryColumn::Mission => {
            Cell::from(format_mission_duration(record.mission_days(today)))
                .style(Style::default().fg(theme.muted))
        }
    }
}

/// `"Page 2 of 5"`, or nothing when everything fits on one page
fn page_indicator(page: &HistoryPage) -> String {
    if page.total_pages > 1 {
        format!("Page {} of {}  (←/→)", page.page_index, page.total_pages)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellites::sort::SortDirection;

    #[test]
    fn sorted_column_shows_arrow() {
        let spec = SortSpec::new(SortKey::LaunchDate, SortDirection::Desc);
        assert_eq!(header_label(HistoryColumn::LaunchDate, spec), "Launched ▼ [2]");
        assert_eq!(header_label(HistoryColumn::Name, spec), "Name [1]");
        assert_eq!(header_label(HistoryColumn::Mission, spec), "Mission");
    }

    #[test]
    fn single_page_has_no_indicator() {
        let page = HistoryPage {
            rows: Vec::new(),
            page_index: 1,
            total_pages: 1,
            matched: 3,
            total: 3,
        };
        assert_eq!(page_indicator(&page), "");

        let page = HistoryPage { total_pages: 3, ..page };
        assert_eq!(page_indicator(&page), "Page 1 of 3  (←/→)");
    }
}
