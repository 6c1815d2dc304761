// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: App name, view tabs, spinner, mission clock
// - Error banner: last fetch failure with retry/dismiss hints
// - Status bar: connection state, record count, key hints
// - Logs panel: tail of the system log
//
// The rest are panels shared by views.

pub mod error_banner;
pub mod formatters;
pub mod logs_panel;
pub mod metric_chart;
pub mod status_bar;
pub mod summary_cards;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use metric_chart::MetricChartPanel;
pub use toast::Toast;
