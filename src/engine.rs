//! The Due Date Engine.
//!
//! [`DueDateEngine`] owns an immutable calendar behind an [`Arc`] so it can be
//! cloned cheaply and shared across threads.

use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::calculation;
use crate::config::{CalendarConfig, ConfigLoader};
use crate::error::EngineResult;
use crate::models::{DayOverrideMap, DueDateResult, WeeklyHolidaySet, WorkingHoursWindow};

/// Computes due dates against a fixed calendar.
///
/// # Example
///
/// ```
/// use due_date_engine::DueDateEngine;
/// use due_date_engine::models::DayOverrideMap;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let overrides: DayOverrideMap = [(
///     NaiveDate::from_ymd_opt(2021, 2, 18).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 2, 20).unwrap(),
/// )]
/// .into_iter()
/// .collect();
/// let engine = DueDateEngine::with_overrides(overrides);
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let due = engine.calculate_due_date(at("2021-02-16 14:12:00"), 16)?;
/// assert_eq!(due, at("2021-02-19 14:12:00"));
/// # Ok::<(), due_date_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DueDateEngine {
    config: Arc<CalendarConfig>,
}

impl DueDateEngine {
    /// Creates an engine over the given calendar.
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates an engine with default working hours and weekly holidays and
    /// the given overrides.
    pub fn with_overrides(overrides: DayOverrideMap) -> Self {
        Self::new(CalendarConfig::new(
            WorkingHoursWindow::default(),
            WeeklyHolidaySet::default(),
            overrides,
        ))
    }

    /// Creates an engine from a configuration directory.
    ///
    /// See [`ConfigLoader::load`] for the expected layout.
    pub fn from_config_dir<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Ok(Self::new(ConfigLoader::load(path)?.into_config()))
    }

    /// Returns the calendar this engine computes against.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// See [`calculation::is_holiday`].
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        calculation::is_holiday(&self.config, date)
    }

    /// See [`calculation::is_within_working_hours`].
    pub fn is_within_working_hours(&self, timestamp: NaiveDateTime) -> bool {
        calculation::is_within_working_hours(&self.config, timestamp)
    }

    /// See [`calculation::calculate_due_date`].
    pub fn calculate_due_date(
        &self,
        submitted_at: NaiveDateTime,
        turnaround_hours: i64,
    ) -> EngineResult<NaiveDateTime> {
        calculation::calculate_due_date(&self.config, submitted_at, turnaround_hours)
    }

    /// See [`calculation::calculate_due_date_with_trace`].
    pub fn calculate_due_date_with_trace(
        &self,
        submitted_at: NaiveDateTime,
        turnaround_hours: i64,
    ) -> EngineResult<DueDateResult> {
        calculation::calculate_due_date_with_trace(&self.config, submitted_at, turnaround_hours)
    }

    /// The informational panel describing the active calendar.
    pub fn info(&self) -> String {
        self.config.to_string()
    }
}
