use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A point on the simulated timeline, read as local wall time.
/// No timezone conversion is ever applied.
pub type TimePoint = NaiveDateTime;

/// Simulated elapsed time. Integer nanoseconds, so sums never drift.
pub type SimDuration = Duration;

/// Text format accepted by `set` and used when rendering `now`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour of day (local) the clock origin is pinned to at start-up
pub const DEFAULT_ORIGIN_HOUR: u32 = 6;

/// Parse `YYYY-MM-DD HH:MM:SS` into a time point.
///
/// Surrounding whitespace is ignored; anything else that does not match
/// [`TIME_FORMAT`] exactly is rejected.
pub fn parse_time_point(text: &str) -> Result<TimePoint, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), TIME_FORMAT)
}

/// Render a time point in [`TIME_FORMAT`]
pub fn format_time_point(time: &TimePoint) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Start-up origin for a given calendar day: that day at `DEFAULT_ORIGIN_HOUR`:00:00
pub fn default_origin(day: NaiveDate) -> TimePoint {
    let time = NaiveTime::from_hms_opt(DEFAULT_ORIGIN_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(time)
}
