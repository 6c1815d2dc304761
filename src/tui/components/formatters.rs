// Formatters
//
// Shared text formatting for numbers, dates and durations shown in the TUI.

use chrono::{DateTime, Utc};

/// Format a number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result.chars().rev().collect()
}

/// `"12,345 days (33.8 yrs)"`; launches in the future show as pending
pub fn format_mission_duration(days: Option<i64>) -> String {
    match days {
        None => "-".to_string(),
        Some(d) if d < 0 => "pre-launch".to_string(),
        Some(d) => format!("{} days ({:.1} yrs)", format_number(d as u64), d as f64 / 365.0),
    }
}

/// Percentage with one decimal, as shown on chart labels
pub fn format_percentage(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Wall-clock time of the last successful refresh
pub fn format_last_updated(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "Never".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn numbers_get_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn mission_duration() {
        assert_eq!(format_mission_duration(Some(730)), "730 days (2.0 yrs)");
        assert_eq!(format_mission_duration(Some(9490)), "9,490 days (26.0 yrs)");
        assert_eq!(format_mission_duration(Some(-3)), "pre-launch");
        assert_eq!(format_mission_duration(None), "-");
    }

    #[test]
    fn last_updated() {
        assert_eq!(format_last_updated(None), "Never");
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_last_updated(Some(t)), "2024-01-02 03:04:05 UTC");
    }

    #[test]
    fn percentage_one_decimal() {
        assert_eq!(format_percentage(50.0), "50.0%");
        assert_eq!(format_percentage(33.3), "33.3%");
    }
}
