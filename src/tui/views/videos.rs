// Videos view - live feed catalog
//
// Feed list on the left, details of the selected feed on the right. Playback is
// left to the browser: `y` copies the embed URL.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::videos::FeedStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let catalog = &app.videos;

    let direction = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Feed list
    let items: Vec<ListItem> = catalog
        .feeds()
        .iter()
        .map(|feed| {
            let badge_color = match feed.status {
                FeedStatus::Live => theme.live,
                FeedStatus::Recorded => theme.recorded,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<9}", feed.status.to_string()), Style::default().fg(badge_color)),
                Span::raw(feed.title),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Feeds ({} live) ", catalog.live_count())),
        )
        .highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(catalog.selected_index()));
    f.render_stateful_widget(list, chunks[0], &mut state);

    // Details
    let feed = catalog.current();
    let details = vec![
        Line::from(Span::styled(
            feed.title,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(feed.description),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status  ", Style::default().fg(theme.muted)),
            Span::styled(feed.status.to_string(), Style::default().fg(match feed.status {
                FeedStatus::Live => theme.live,
                FeedStatus::Recorded => theme.recorded,
            })),
        ]),
        Line::from(vec![
            Span::styled("URL     ", Style::default().fg(theme.muted)),
            Span::styled(feed.url, Style::default().fg(theme.chart_primary)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "y copy URL to open in your browser",
            Style::default().fg(theme.muted),
        )),
    ];

    let panel = Paragraph::new(details).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .title(" Now Showing "),
    );
    f.render_widget(panel, chunks[1]);
}
