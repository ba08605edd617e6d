//! Weekly holiday set model.
//!
//! Weekdays are identified by their ISO number, Monday = 1 through Sunday = 7.

use std::collections::BTreeSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The weekdays that are always non-working unless overridden.
///
/// # Example
///
/// ```
/// use due_date_engine::models::WeeklyHolidaySet;
/// use chrono::Weekday;
///
/// let weekly = WeeklyHolidaySet::default();
/// assert!(weekly.contains(Weekday::Sat));
/// assert!(weekly.contains(Weekday::Sun));
/// assert!(!weekly.contains(Weekday::Mon));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct WeeklyHolidaySet {
    iso_numbers: BTreeSet<u32>,
}

impl WeeklyHolidaySet {
    /// Builds a set from ISO weekday numbers.
    ///
    /// Every number must be in `1..=7`, and at least one weekday must remain
    /// a working day; otherwise due-date stepping could never terminate.
    pub fn from_iso_numbers(numbers: &[u32]) -> EngineResult<Self> {
        let mut iso_numbers = BTreeSet::new();
        for &number in numbers {
            if !(1..=7).contains(&number) {
                return Err(EngineError::invalid_config(
                    "weekly_holidays",
                    format!("{} is not an ISO weekday number (1-7)", number),
                ));
            }
            iso_numbers.insert(number);
        }
        if iso_numbers.len() == 7 {
            return Err(EngineError::invalid_config(
                "weekly_holidays",
                "at least one weekday must be a working day",
            ));
        }
        Ok(Self { iso_numbers })
    }

    /// A set with no weekly holidays.
    ///
    /// Every weekday is then a working day unless the override map says
    /// otherwise. This is what `weekly_holidays: []` deserializes to.
    ///
    /// ```
    /// use due_date_engine::models::WeeklyHolidaySet;
    /// use chrono::Weekday;
    ///
    /// let weekly = WeeklyHolidaySet::empty();
    /// assert!(!weekly.contains(Weekday::Sun));
    /// assert_eq!(weekly.iso_numbers().count(), 0);
    /// ```
    pub fn empty() -> Self {
        Self {
            iso_numbers: BTreeSet::new(),
        }
    }

    /// Whether the weekday is a weekly holiday.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.iso_numbers.contains(&weekday.number_from_monday())
    }

    /// The ISO numbers in ascending order.
    pub fn iso_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.iso_numbers.iter().copied()
    }
}

impl Default for WeeklyHolidaySet {
    /// Saturday and Sunday.
    fn default() -> Self {
        Self {
            iso_numbers: BTreeSet::from([6, 7]),
        }
    }
}

impl TryFrom<Vec<u32>> for WeeklyHolidaySet {
    type Error = EngineError;

    fn try_from(numbers: Vec<u32>) -> EngineResult<Self> {
        Self::from_iso_numbers(&numbers)
    }
}

impl From<WeeklyHolidaySet> for Vec<u32> {
    fn from(set: WeeklyHolidaySet) -> Self {
        set.iso_numbers.into_iter().collect()
    }
}
