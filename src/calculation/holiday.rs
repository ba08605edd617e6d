//! Holiday classification.
//!
//! A date is a holiday when it is a non-working override, or when its weekday
//! is a weekly holiday and it is not a working override.

use chrono::{Datelike, NaiveDate};

use crate::config::CalendarConfig;

/// Determines whether a date is excluded from working-time accounting.
///
/// Rules are applied in priority order:
/// 1. an override key is a holiday,
/// 2. an override value is a working day,
/// 3. a weekly holiday weekday is a holiday,
/// 4. anything else is a working day.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::is_holiday;
/// use due_date_engine::config::CalendarConfig;
/// use chrono::NaiveDate;
///
/// let config = CalendarConfig::default();
///
/// // 2021-02-20 is a Saturday
/// assert!(is_holiday(&config, NaiveDate::from_ymd_opt(2021, 2, 20).unwrap()));
/// // 2021-02-19 is a Friday
/// assert!(!is_holiday(&config, NaiveDate::from_ymd_opt(2021, 2, 19).unwrap()));
/// ```
pub fn is_holiday(config: &CalendarConfig, date: NaiveDate) -> bool {
    let overrides = config.overrides();
    if overrides.is_forced_holiday(date) {
        return true;
    }
    if overrides.is_forced_working(date) {
        return false;
    }
    config.weekly_holidays().contains(date.weekday())
}
