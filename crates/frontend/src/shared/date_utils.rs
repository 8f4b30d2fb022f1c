/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

pub const NO_DATE: &str = "—";

/// Format a timestamp as `DD.MM.YYYY HH:MM` (UTC), or a dash when absent
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%d.%m.%Y %H:%M").to_string(),
        None => NO_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "15.03.2024 14:02");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_timestamp(None), "—");
    }
}
