use chrono::{DateTime, Datelike, Local};

pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const SNAPSHOT_TIME_FORMAT: &str = "%H:%M:%S UTC";
}

/// Year shown in the footer.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Upstream snapshot time (epoch ms) for display. `None` if out of range.
pub fn epoch_ms_to_time_string(epoch_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format(TimeUtils::SNAPSHOT_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_time_is_formatted_in_utc() {
        // 2024-06-10T06:13:20Z
        assert_eq!(
            epoch_ms_to_time_string(1_718_000_000_000).as_deref(),
            Some("06:13:20 UTC")
        );
    }

    #[test]
    fn out_of_range_timestamp_is_dropped() {
        assert_eq!(epoch_ms_to_time_string(i64::MAX), None);
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
