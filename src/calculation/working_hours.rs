//! Working-hours validation.

use chrono::NaiveDateTime;

use crate::config::CalendarConfig;

use super::holiday::is_holiday;

/// Determines whether a timestamp lies strictly inside working hours.
///
/// The date must not be a holiday, and the time must be strictly after the
/// window start and strictly before the window end. Both boundaries are
/// outside working hours.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::is_within_working_hours;
/// use due_date_engine::config::CalendarConfig;
/// use chrono::NaiveDateTime;
///
/// let config = CalendarConfig::default();
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert!(is_within_working_hours(&config, at("2021-02-16 14:12:00")));
/// assert!(!is_within_working_hours(&config, at("2021-02-16 09:00:00")));
/// assert!(!is_within_working_hours(&config, at("2021-02-16 17:00:00")));
/// ```
pub fn is_within_working_hours(config: &CalendarConfig, timestamp: NaiveDateTime) -> bool {
    let date = timestamp.date();
    if is_holiday(config, date) {
        return false;
    }
    let window = config.working_hours();
    window.start_on(date) < timestamp && timestamp < window.end_on(date)
}
