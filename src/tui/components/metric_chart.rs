// Metric chart panel for the dashboard
//
// Share breakdowns (orbit, status) render as horizontal bars labelled
// "<name> <percentage>%"; the launch timeline renders one vertical bar per year.

use super::formatters::format_percentage;
use crate::satellites::aggregate::{Share, YearBucket};
use crate::satellites::{Aggregate, Metric};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

pub struct MetricChartPanel;

impl MetricChartPanel {
    pub fn render(frame: &mut Frame, area: Rect, metric: Metric, data: &Aggregate, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {}  ◀ {}/{} ▶ ", metric.title(), metric_position(metric), Metric::ALL.len()));

        if data.is_empty() {
            let placeholder = Paragraph::new("No satellite data to chart")
                .block(block)
                .style(Style::default().fg(theme.muted));
            frame.render_widget(placeholder, area);
            return;
        }

        match data {
            Aggregate::Shares(shares) => Self::render_shares(frame, area, block, shares, theme),
            Aggregate::Timeline(buckets) => Self::render_timeline(frame, area, block, buckets, theme),
        }
    }

    fn render_shares(frame: &mut Frame, area: Rect, block: Block, shares: &[Share], theme: &Theme) {
        let bars: Vec<Bar> = shares
            .iter()
            .enumerate()
            .map(|(idx, share)| {
                let color = if idx % 2 == 0 {
                    theme.chart_primary
                } else {
                    theme.chart_secondary
                };
                Bar::default()
                    .label(Line::from(share_label(share)))
                    .value(share.count as u64)
                    .text_value(share.count.to_string())
                    .style(Style::default().fg(color))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .style(Style::default().fg(theme.foreground));

        frame.render_widget(chart, area);
    }

    fn render_timeline(
        frame: &mut Frame,
        area: Rect,
        block: Block,
        buckets: &[YearBucket],
        theme: &Theme,
    ) {
        let bars: Vec<Bar> = buckets
            .iter()
            .map(|bucket| {
                let color = if bucket.year.is_some() {
                    theme.chart_primary
                } else {
                    theme.muted
                };
                Bar::default()
                    .label(Line::from(bucket.label()))
                    .value(bucket.count as u64)
                    .style(Style::default().fg(color))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(7)
            .bar_gap(1)
            .style(Style::default().fg(theme.foreground));

        frame.render_widget(chart, area);
    }
}

/// `"Low Earth Orbit 33.3%"`
pub fn share_label(share: &Share) -> String {
    format!("{} {}", share.name, format_percentage(share.percentage))
}

fn metric_position(metric: Metric) -> usize {
    Metric::ALL.iter().position(|m| *m == metric).unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_labels_carry_percentage() {
        let share = Share {
            name: "LEO".to_string(),
            count: 1,
            percentage: 50.0,
        };
        assert_eq!(share_label(&share), "LEO 50.0%");
    }

    #[test]
    fn metric_positions_are_one_based() {
        assert_eq!(metric_position(Metric::OrbitDistribution), 1);
        assert_eq!(metric_position(Metric::StatusOverview), 3);
    }
}
