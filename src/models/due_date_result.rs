//! Due date calculation result and its audit trace.
//!
//! [`DueDateResult`] captures the computed due date together with one
//! [`DayStep`] per calendar day visited, so callers can see where the
//! turnaround budget was spent and which days were skipped.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How a visited day was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A day on which working time accrued.
    Working,
    /// A day skipped without consuming any budget.
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Working => write!(f, "Working"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// One calendar day visited while computing a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStep {
    /// The calendar date.
    pub date: NaiveDate,
    /// Whether the day was worked or skipped.
    pub kind: DayKind,
    /// Working seconds of the budget spent on this day.
    pub consumed_seconds: i64,
    /// Budget left after this day.
    pub remaining_seconds: i64,
}

/// The outcome of a due date calculation.
///
/// # Example
///
/// ```
/// use due_date_engine::models::{DayKind, DayStep, DueDateResult};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 2, 16).unwrap();
/// let result = DueDateResult {
///     submitted_at: date.and_hms_opt(14, 0, 0).unwrap(),
///     turnaround_hours: 1,
///     due_at: date.and_hms_opt(15, 0, 0).unwrap(),
///     steps: vec![DayStep {
///         date,
///         kind: DayKind::Working,
///         consumed_seconds: 3600,
///         remaining_seconds: 0,
///     }],
/// };
/// assert_eq!(result.working_seconds(), 3600);
/// assert_eq!(result.holidays_skipped(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateResult {
    /// The validated submission timestamp.
    pub submitted_at: NaiveDateTime,
    /// The requested turnaround in working hours.
    pub turnaround_hours: i64,
    /// The computed due date.
    pub due_at: NaiveDateTime,
    /// Days visited, in calendar order.
    pub steps: Vec<DayStep>,
}

impl DueDateResult {
    /// Total working seconds consumed across all steps.
    pub fn working_seconds(&self) -> i64 {
        self.steps.iter().map(|s| s.consumed_seconds).sum()
    }

    /// Number of holiday days stepped over.
    pub fn holidays_skipped(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == DayKind::Holiday)
            .count()
    }
}
