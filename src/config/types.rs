//! Calendar configuration types.
//!
//! [`CalendarConfig`] bundles the working-hours window, the weekly holiday set
//! and the day override map. It is built once and read by every calculation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{DayOverrideMap, WeeklyHolidaySet, WorkingHoursWindow};

/// The complete calendar a due date is computed against.
///
/// Every field is optional when deserialized and falls back to its default:
/// 09:00:00-17:00:00, Saturday and Sunday off, no overrides.
///
/// # Example
///
/// ```
/// use due_date_engine::config::CalendarConfig;
///
/// let config = CalendarConfig::default();
/// assert_eq!(config.working_hours().workday_seconds(), 28_800);
/// assert!(config.overrides().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    working_hours: WorkingHoursWindow,
    weekly_holidays: WeeklyHolidaySet,
    overrides: DayOverrideMap,
}

impl CalendarConfig {
    /// Creates a calendar from its component parts.
    ///
    /// Override dates used both as a key and as a value are logged; they
    /// resolve as holidays.
    pub fn new(
        working_hours: WorkingHoursWindow,
        weekly_holidays: WeeklyHolidaySet,
        overrides: DayOverrideMap,
    ) -> Self {
        for date in overrides.conflicts() {
            warn!(%date, "Override date is both non-working and working; treating as non-working");
        }
        Self {
            working_hours,
            weekly_holidays,
            overrides,
        }
    }

    /// Returns the working-hours window.
    pub fn working_hours(&self) -> &WorkingHoursWindow {
        &self.working_hours
    }

    /// Returns the weekly holiday set.
    pub fn weekly_holidays(&self) -> &WeeklyHolidaySet {
        &self.weekly_holidays
    }

    /// Returns the day override map.
    pub fn overrides(&self) -> &DayOverrideMap {
        &self.overrides
    }
}

impl fmt::Display for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "=======================================================";

        let indexes: Vec<String> = self
            .weekly_holidays
            .iso_numbers()
            .map(|n| n.to_string())
            .collect();

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Info panel")?;
        writeln!(
            f,
            "Working hours: {} - {}",
            self.working_hours.start(),
            self.working_hours.end()
        )?;
        writeln!(f, "Non working day indexes: {}", indexes.join(", "))?;
        writeln!(f, "Custom non working days:")?;
        for (non_working, working) in self.overrides.iter() {
            writeln!(f, "\t{} => {}", non_working, working)?;
        }
        write!(f, "{}", RULE)
    }
}
