/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 70 cols: only the essentials
    Compact,
    /// 70-109 cols: half-screen
    Normal,
    /// 110+ cols: full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Compact,
            70..=109 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Columns of the history table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryColumn {
    Name,
    OrbitType,
    LaunchDate,
    Status,
    Mission,
}

impl HistoryColumn {
    pub fn header(&self) -> &'static str {
        match self {
            HistoryColumn::Name => "Name",
            HistoryColumn::OrbitType => "Orbit",
            HistoryColumn::LaunchDate => "Launched",
            HistoryColumn::Status => "Status",
            HistoryColumn::Mission => "Mission",
        }
    }
}

/// Which history columns fit at this width
pub fn history_columns(bp: Breakpoint) -> &'static [HistoryColumn] {
    use HistoryColumn::*;
    match bp {
        Breakpoint::Compact => &[Name, Status],
        Breakpoint::Normal => &[Name, OrbitType, LaunchDate, Status],
        Breakpoint::Wide => &[Name, OrbitType, LaunchDate, Status, Mission],
    }
}

/// Rows reserved for the log strip at the bottom; hidden on short terminals
pub fn logs_height(total_height: u16) -> u16 {
    match total_height {
        0..=23 => 0,
        24..=39 => 5,
        _ => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(109), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(110), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn narrow_tables_drop_columns() {
        assert_eq!(history_columns(Breakpoint::Compact).len(), 2);
        assert!(history_columns(Breakpoint::Wide).contains(&HistoryColumn::Mission));
        assert!(!history_columns(Breakpoint::Normal).contains(&HistoryColumn::Mission));
    }

    #[test]
    fn logs_hidden_on_short_terminals() {
        assert_eq!(logs_height(20), 0);
        assert_eq!(logs_height(30), 5);
        assert_eq!(logs_height(50), 8);
    }
}
