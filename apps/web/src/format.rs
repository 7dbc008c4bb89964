//! Display formatting shared by the report, snapshot, chart and session views.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an ISO-8601 instant. Timestamps without an offset are taken as UTC,
/// which is how the backend writes them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `2024-01-01T00:00:00Z` -> `Jan 1, 2024, 12:00 AM`, always in UTC rather than the
/// viewer's zone. Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(instant) => instant.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// First eight characters of a session id.
pub fn short_session_id(session_id: &str) -> &str {
    match session_id.char_indices().nth(8) {
        Some((end, _)) => &session_id[..end],
        None => session_id,
    }
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_change_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

pub fn format_market_cap(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${:.0}", value)
    }
}

pub fn format_volume(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(ratio) => format!("{:.2}", ratio),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_midnight() {
        assert_eq!(format_timestamp("2024-01-01T00:00:00Z"), "Jan 1, 2024, 12:00 AM");
    }

    #[test]
    fn formats_afternoon_with_padded_hour() {
        assert_eq!(format_timestamp("2025-10-26T14:05:09.123456Z"), "Oct 26, 2025, 02:05 PM");
    }

    #[test]
    fn naive_timestamps_are_utc() {
        assert_eq!(format_timestamp("2025-10-26T09:30:00.5"), "Oct 26, 2025, 09:30 AM");
    }

    #[test]
    fn space_separated_timestamps_parse() {
        assert_eq!(format_timestamp("2025-10-26 12:00:00"), "Oct 26, 2025, 12:00 PM");
        assert_eq!(format_timestamp("2025-10-26 12:00:00.250"), "Oct 26, 2025, 12:00 PM");
    }

    #[test]
    fn offsets_are_normalized() {
        assert_eq!(format_timestamp("2024-03-10T08:15:00+02:00"), "Mar 10, 2024, 06:15 AM");
    }

    #[test]
    fn garbage_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn session_id_is_truncated_to_eight_chars() {
        assert_eq!(short_session_id("abcdef1234567890"), "abcdef12");
        assert_eq!(short_session_id("s1"), "s1");
        assert_eq!(short_session_id("会话会话会话会话会话"), "会话会话会话会话");
    }

    #[test]
    fn money_and_ratios() {
        assert_eq!(format_price(189.5), "$189.50");
        assert_eq!(format_change_pct(1.234), "+1.23%");
        assert_eq!(format_change_pct(-0.5), "-0.50%");
        assert_eq!(format_market_cap(2.95e12), "$2.95T");
        assert_eq!(format_market_cap(512.3e9), "$512.30B");
        assert_eq!(format_market_cap(45e6), "$45.00M");
        assert_eq!(format_volume(52_300_000.0), "52.3M");
        assert_eq!(format_ratio(None), "N/A");
        assert_eq!(format_ratio(Some(28.456)), "28.46");
    }
}
