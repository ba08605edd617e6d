//! Working-hours window model.
//!
//! This module defines the [`WorkingHoursWindow`] type: the daily start and end
//! time-of-day bounding when work is in progress.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The daily window during which working time accrues.
///
/// The window is a single shift per day; `start` is strictly before `end`.
///
/// # Example
///
/// ```
/// use due_date_engine::models::WorkingHoursWindow;
/// use chrono::NaiveTime;
///
/// let window = WorkingHoursWindow::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(window.workday_seconds(), 8 * 60 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct WorkingHoursWindow {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Deserialize)]
struct RawWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawWindow> for WorkingHoursWindow {
    type Error = EngineError;

    fn try_from(raw: RawWindow) -> EngineResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl WorkingHoursWindow {
    /// Creates a window, rejecting one whose start is not before its end.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if start >= end {
            return Err(EngineError::invalid_config(
                "working_hours",
                format!("start {} must be before end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// The time of day at which work starts.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The time of day at which work ends.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of one working day in whole seconds.
    pub fn workday_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// The start of the window on the given date.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// The end of the window on the given date.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }
}

impl Default for WorkingHoursWindow {
    /// 09:00:00 to 17:00:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("Valid default start time"),
            end: NaiveTime::from_hms_opt(17, 0, 0).expect("Valid default end time"),
        }
    }
}
