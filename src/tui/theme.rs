// Theme system for the TUI
//
// Three built-in palettes, switchable at runtime with `t`. The config file
// names the starting palette; unknown names fall back to Mission Control.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    MissionControl,
    DeepSpace,
    Terminal,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [
        ThemeKind::MissionControl,
        ThemeKind::DeepSpace,
        ThemeKind::Terminal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::MissionControl => "Mission Control",
            ThemeKind::DeepSpace => "Deep Space",
            ThemeKind::Terminal => "Terminal",
        }
    }

    /// Case-insensitive lookup; `-`, `_` and spaces are interchangeable
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL.into_iter().find(|kind| normalize(kind.name()) == wanted)
    }

    pub fn next(self) -> Self {
        let current = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(current + 1) % Self::ALL.len()]
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Satellite Status Colors ─────────────────────────────
    pub active: Color,
    pub inactive: Color,
    pub error: Color,

    // ─── Charts ──────────────────────────────────────────────
    pub chart_primary: Color,
    pub chart_secondary: Color,

    // ─── Video Feeds ─────────────────────────────────────────
    pub live: Color,
    pub recorded: Color,

    // ─── Log Levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,

    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_kind(ThemeKind::default())
    }
}

impl Theme {
    /// Resolve a configured theme name
    pub fn by_name(name: &str) -> Self {
        match ThemeKind::from_name(name) {
            Some(kind) => Self::from_kind(kind),
            None => {
                tracing::warn!("Unknown theme '{}', using {}", name, ThemeKind::default().name());
                Self::default()
            }
        }
    }

    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::MissionControl => Self::mission_control(),
            ThemeKind::DeepSpace => Self::deep_space(),
            ThemeKind::Terminal => Self::terminal(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Color for a satellite status string
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "Active" => self.active,
            "Inactive" | "Decommissioned" => self.inactive,
            _ => self.muted,
        }
    }

    /// Dark blue console with amber accents
    fn mission_control() -> Self {
        Self {
            kind: ThemeKind::MissionControl,
            background: Color::Rgb(10, 14, 26),
            foreground: Color::Rgb(220, 226, 240),
            muted: Color::Rgb(110, 120, 140),
            title: Color::Rgb(96, 165, 250),
            border: Color::Rgb(51, 65, 85),
            highlight: Color::Rgb(251, 191, 36),
            status_bar: Color::Rgb(148, 163, 184),
            selection: Color::Rgb(30, 41, 59),
            selection_fg: Color::Rgb(251, 191, 36),
            active: Color::Rgb(74, 222, 128),
            inactive: Color::Rgb(248, 113, 113),
            error: Color::Rgb(239, 68, 68),
            chart_primary: Color::Rgb(96, 165, 250),
            chart_secondary: Color::Rgb(167, 139, 250),
            live: Color::Rgb(239, 68, 68),
            recorded: Color::Rgb(148, 163, 184),
            log_error: Color::Rgb(239, 68, 68),
            log_warn: Color::Rgb(251, 191, 36),
            log_info: Color::Rgb(96, 165, 250),
            log_debug: Color::Rgb(110, 120, 140),
            border_type: BorderType::Rounded,
        }
    }

    /// Near-black with violet accents
    fn deep_space() -> Self {
        Self {
            kind: ThemeKind::DeepSpace,
            background: Color::Rgb(5, 5, 12),
            foreground: Color::Rgb(230, 230, 245),
            muted: Color::Rgb(100, 100, 130),
            title: Color::Rgb(192, 132, 252),
            border: Color::Rgb(55, 48, 90),
            highlight: Color::Rgb(244, 114, 182),
            status_bar: Color::Rgb(165, 160, 200),
            selection: Color::Rgb(35, 30, 60),
            selection_fg: Color::Rgb(244, 114, 182),
            active: Color::Rgb(52, 211, 153),
            inactive: Color::Rgb(251, 113, 133),
            error: Color::Rgb(244, 63, 94),
            chart_primary: Color::Rgb(192, 132, 252),
            chart_secondary: Color::Rgb(56, 189, 248),
            live: Color::Rgb(244, 63, 94),
            recorded: Color::Rgb(165, 160, 200),
            log_error: Color::Rgb(244, 63, 94),
            log_warn: Color::Rgb(250, 204, 21),
            log_info: Color::Rgb(192, 132, 252),
            log_debug: Color::Rgb(100, 100, 130),
            border_type: BorderType::Double,
        }
    }

    /// Plain ANSI colors on the terminal's own background
    fn terminal() -> Self {
        Self {
            kind: ThemeKind::Terminal,
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            selection: Color::DarkGray,
            selection_fg: Color::Yellow,
            active: Color::Green,
            inactive: Color::Red,
            error: Color::Red,
            chart_primary: Color::Cyan,
            chart_secondary: Color::Magenta,
            live: Color::Red,
            recorded: Color::Gray,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            border_type: BorderType::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_loosely() {
        assert_eq!(ThemeKind::from_name("Deep Space"), Some(ThemeKind::DeepSpace));
        assert_eq!(ThemeKind::from_name("deep-space"), Some(ThemeKind::DeepSpace));
        assert_eq!(ThemeKind::from_name(" TERMINAL "), Some(ThemeKind::Terminal));
        assert_eq!(ThemeKind::from_name("solarized"), None);
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(Theme::by_name("nope").kind, ThemeKind::MissionControl);
        assert_eq!(Theme::by_name("mission_control").kind, ThemeKind::MissionControl);
    }

    #[test]
    fn next_cycles_all() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
    }
}
