//! Calculation logic for the Due Date Engine.
//!
//! This module contains holiday classification, working-hours validation and
//! the due date calculation itself. Every function is a pure computation over
//! a [`CalendarConfig`](crate::config::CalendarConfig).

mod due_date;
mod holiday;
mod working_hours;

pub use due_date::{
    SECONDS_PER_HOUR, calculate_due_date, calculate_due_date_with_trace, skip_trailing_holidays,
};
pub use holiday::is_holiday;
pub use working_hours::is_within_working_hours;
