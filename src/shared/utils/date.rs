use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Parse a timestamp as the backend emits it. Entity timestamps come as
/// local date-times without an offset (`2025-01-02T03:04:05`), while some
/// responses carry full RFC 3339 strings; accept both.
pub fn parse_backend_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `2025-01-02 03:04:05`
pub fn format_date(raw: &str) -> String {
    parse_backend_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2025-01-02`
pub fn format_date_short(raw: &str) -> String {
    parse_backend_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Compact relative time for list views ("just now", "5min", "3h", "2d",
/// falling back to the short date past a week).
pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff = *now - *timestamp;

    if diff < Duration::minutes(1) {
        "just now".to_string()
    } else if diff < Duration::hours(1) {
        format!("{}min", diff.num_minutes())
    } else if diff < Duration::days(1) {
        format!("{}h", diff.num_hours())
    } else if diff < Duration::days(7) {
        format!("{}d", diff.num_days())
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_local_datetime_without_offset() {
        let dt = parse_backend_timestamp("2025-03-04T05:06:07").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_backend_timestamp("2025-03-04T05:06:07+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 4, 3, 6, 7).unwrap());
    }

    #[test]
    fn parses_fractional_seconds() {
        assert!(parse_backend_timestamp("2025-03-04T05:06:07.123456").is_some());
    }

    #[test]
    fn unparseable_input_is_shown_verbatim() {
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let at = |secs: i64| now - Duration::seconds(secs);

        assert_eq!(format_relative_time(&at(30), &now), "just now");
        assert_eq!(format_relative_time(&at(5 * 60), &now), "5min");
        assert_eq!(format_relative_time(&at(3 * 3600), &now), "3h");
        assert_eq!(format_relative_time(&at(2 * 86400), &now), "2d");
        assert_eq!(format_relative_time(&at(30 * 86400), &now), "2025-05-16");
    }
}
