// Dashboard view - metrics over the whole collection
//
// Layout:
// - Summary cards
// - Metric chart (left) | Active satellites (right, hidden when compact)

use crate::satellites::aggregate::active_satellites;
use crate::satellites::{aggregate, Summary};
use crate::tui::app::App;
use crate::tui::components::{summary_cards, MetricChartPanel};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Active satellites listed beside the chart
const ACTIVE_LIST_LIMIT: usize = 8;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let snapshot = app.snapshot();
    let records = snapshot.satellites.as_slice();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(summary_cards::HEIGHT), Constraint::Min(6)])
        .split(area);

    summary_cards::render(f, rows[0], &Summary::of(records), snapshot.loading, theme);

    let show_list = Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if show_list {
            [Constraint::Percentage(65), Constraint::Percentage(35)]
        } else {
            [Constraint::Percentage(100), Constraint::Length(0)]
        })
        .split(rows[1]);

    let data = aggregate(records, app.metric);
    MetricChartPanel::render(f, cols[0], app.metric, &data, theme);

    if show_list {
        let items: Vec<ListItem> = active_satellites(records, ACTIVE_LIST_LIMIT)
            .into_iter()
            .map(|sat| {
                let year = sat
                    .launch_date
                    .year()
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "----".to_string());
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme.active)),
                    Span::styled(
                        sat.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} · {}", sat.orbit_type, year),
                        Style::default().fg(theme.muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Active Satellites "),
        );
        f.render_widget(list, cols[1]);
    }
}
