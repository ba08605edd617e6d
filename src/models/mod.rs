//! Core data models for the Due Date Engine.
//!
//! This module contains the calendar building blocks and the calculation result.

mod day_override;
mod due_date_result;
mod weekly_holidays;
mod working_hours;

pub use day_override::DayOverrideMap;
pub use due_date_result::{DayKind, DayStep, DueDateResult};
pub use weekly_holidays::WeeklyHolidaySet;
pub use working_hours::WorkingHoursWindow;
