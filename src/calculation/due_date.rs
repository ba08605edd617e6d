//! Due date calculation.
//!
//! This module walks forward from a submission timestamp, spending the
//! turnaround budget only inside the working-hours window on non-holiday
//! days, and returns the instant at which the budget runs out.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::{debug, trace, warn};

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayKind, DayStep, DueDateResult};

use super::holiday::is_holiday;
use super::working_hours::is_within_working_hours;

/// Number of seconds in one turnaround hour.
pub const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Calculates the due date for a submission.
///
/// # Arguments
///
/// * `config` - The calendar to compute against
/// * `submitted_at` - The submission timestamp; must be inside working hours
/// * `turnaround_hours` - Working hours allotted; zero or less means no turnaround
///
/// # Returns
///
/// The due timestamp, or [`EngineError::InvalidInput`] if the submission is
/// not strictly inside working hours on a working day.
///
/// The result never falls on a holiday. With a positive turnaround its
/// time of day lies in `[start, end)` of the working window; a budget that
/// ends exactly at close of business is due at the next working day's start.
/// Any sub-second part of the submission is carried to the due instant.
///
/// # Example
///
/// ```
/// use due_date_engine::calculation::calculate_due_date;
/// use due_date_engine::config::CalendarConfig;
/// use chrono::NaiveDateTime;
///
/// let config = CalendarConfig::default();
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // Tuesday afternoon plus two working days
/// let due = calculate_due_date(&config, at("2021-02-16 14:12:00"), 16).unwrap();
/// assert_eq!(due, at("2021-02-18 14:12:00"));
///
/// // Friday afternoon rolls over the weekend
/// let due = calculate_due_date(&config, at("2021-02-19 16:00:00"), 2).unwrap();
/// assert_eq!(due, at("2021-02-22 10:00:00"));
/// ```
pub fn calculate_due_date(
    config: &CalendarConfig,
    submitted_at: NaiveDateTime,
    turnaround_hours: i64,
) -> EngineResult<NaiveDateTime> {
    let due_at = compute(config, submitted_at, turnaround_hours, None)?;
    debug!(%submitted_at, turnaround_hours, %due_at, "Calculated due date");
    Ok(due_at)
}

/// Calculates the due date and records every calendar day visited.
///
/// Same contract as [`calculate_due_date`]. Step amounts are whole seconds;
/// they always sum to the full turnaround.
pub fn calculate_due_date_with_trace(
    config: &CalendarConfig,
    submitted_at: NaiveDateTime,
    turnaround_hours: i64,
) -> EngineResult<DueDateResult> {
    let mut steps = Vec::new();
    let due_at = compute(config, submitted_at, turnaround_hours, Some(&mut steps))?;

    debug!(
        %submitted_at,
        turnaround_hours,
        %due_at,
        days = steps.len(),
        "Calculated due date with trace"
    );

    Ok(DueDateResult {
        submitted_at,
        turnaround_hours,
        due_at,
        steps,
    })
}

/// Validates the submission, spends the budget and skips trailing holidays.
fn compute(
    config: &CalendarConfig,
    submitted_at: NaiveDateTime,
    turnaround_hours: i64,
    steps: Option<&mut Vec<DayStep>>,
) -> EngineResult<NaiveDateTime> {
    if !is_within_working_hours(config, submitted_at) {
        warn!(%submitted_at, "Submission is not during working hours");
        return Err(EngineError::InvalidInput {
            timestamp: submitted_at,
        });
    }

    let landed = if turnaround_hours > 0 {
        let budget = turnaround_hours.saturating_mul(SECONDS_PER_HOUR);
        consume_turnaround(config, submitted_at, budget, steps)?
    } else {
        submitted_at
    };
    skip_trailing_holidays(config, landed)
}

/// Moves a timestamp forward one calendar day at a time until it is off holidays.
///
/// The time of day is kept. A timestamp already on a working day is returned
/// unchanged.
pub fn skip_trailing_holidays(
    config: &CalendarConfig,
    timestamp: NaiveDateTime,
) -> EngineResult<NaiveDateTime> {
    let mut current = timestamp;
    while is_holiday(config, current.date()) {
        current = next_day(current.date())?.and_time(current.time());
    }
    Ok(current)
}

/// Spends `remaining` seconds of working time starting at `submitted_at`.
///
/// Each working day offers the seconds between the cursor and close of
/// business; once the budget fits strictly inside what a day offers, the
/// due instant is on that day. Every day after the first starts at the
/// window start.
///
/// The walk runs on whole seconds. The budget and the window are whole
/// seconds too, so the submission's fraction of a second never changes
/// which day the budget runs out on; it is added back to the due instant.
fn consume_turnaround(
    config: &CalendarConfig,
    submitted_at: NaiveDateTime,
    mut remaining: i64,
    mut steps: Option<&mut Vec<DayStep>>,
) -> EngineResult<NaiveDateTime> {
    let window = config.working_hours();
    let fraction = Duration::nanoseconds(i64::from(submitted_at.nanosecond()));
    let mut cursor = submitted_at - fraction;

    loop {
        let date = cursor.date();

        if is_holiday(config, date) {
            trace!(%date, remaining, "Skipping holiday");
            record(&mut steps, date, DayKind::Holiday, 0, remaining);
        } else {
            let available = (window.end_on(date) - cursor).num_seconds();

            if remaining < available {
                record(&mut steps, date, DayKind::Working, remaining, 0);
                return Ok(cursor + Duration::seconds(remaining) + fraction);
            }

            remaining -= available;
            trace!(%date, consumed = available, remaining, "Consumed working day");
            record(&mut steps, date, DayKind::Working, available, remaining);
        }

        cursor = window.start_on(next_day(date)?);
    }
}

fn record(
    steps: &mut Option<&mut Vec<DayStep>>,
    date: NaiveDate,
    kind: DayKind,
    consumed_seconds: i64,
    remaining_seconds: i64,
) {
    if let Some(steps) = steps.as_deref_mut() {
        steps.push(DayStep {
            date,
            kind,
            consumed_seconds,
            remaining_seconds,
        });
    }
}

/// The following calendar date.
fn next_day(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.succ_opt()
        .ok_or(EngineError::CalendarOverflow { date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOverrideMap, WeeklyHolidaySet, WorkingHoursWindow};
    use chrono::NaiveTime;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// 09:00-17:00, Saturday/Sunday off, Thursday 2021-02-18 swapped for Saturday 2021-02-20.
    fn reference_config() -> CalendarConfig {
        let overrides: DayOverrideMap = [(make_date("2021-02-18"), make_date("2021-02-20"))]
            .into_iter()
            .collect();
        CalendarConfig::new(
            WorkingHoursWindow::default(),
            WeeklyHolidaySet::default(),
            overrides,
        )
    }

    fn assert_due(input: (&str, &str), hours: i64, expected: (&str, &str)) {
        let config = reference_config();
        let due = calculate_due_date(&config, make_datetime(input.0, input.1), hours);
        assert_eq!(
            due.unwrap(),
            make_datetime(expected.0, expected.1),
            "input {} {} with {}h",
            input.0,
            input.1,
            hours
        );
    }

    // ==========================================================================
    // DD-001: Two working days across a forced holiday
    // ==========================================================================
    #[test]
    fn test_dd_001_sixteen_hours_skips_forced_holiday() {
        assert_due(("2021-02-16", "14:12:00"), 16, ("2021-02-19", "14:12:00"));
    }

    // ==========================================================================
    // DD-002: Remainder carries into the next morning
    // ==========================================================================
    #[test]
    fn test_dd_002_five_hours_carries_to_next_day() {
        assert_due(("2021-02-16", "14:11:00"), 5, ("2021-02-17", "11:11:00"));
    }

    // ==========================================================================
    // DD-003: One second before close, carried past a forced holiday
    // ==========================================================================
    #[test]
    fn test_dd_003_last_second_of_day() {
        assert_due(("2021-02-17", "16:59:59"), 2, ("2021-02-19", "10:59:59"));
    }

    // ==========================================================================
    // DD-004: Lands on a Saturday forced to be working
    // ==========================================================================
    #[test]
    fn test_dd_004_lands_on_forced_working_saturday() {
        assert_due(("2021-02-19", "09:01:00"), 10, ("2021-02-20", "11:01:00"));
    }

    // ==========================================================================
    // DD-005: Submission on a forced holiday is rejected
    // ==========================================================================
    #[test]
    fn test_dd_005_forced_holiday_submission_rejected() {
        let config = reference_config();
        let submitted = make_datetime("2021-02-18", "10:45:23");
        match calculate_due_date(&config, submitted, 11) {
            Err(EngineError::InvalidInput { timestamp }) => assert_eq!(timestamp, submitted),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // ==========================================================================
    // DD-006: Forced working Saturday rolls over Sunday
    // ==========================================================================
    #[test]
    fn test_dd_006_forced_working_saturday_rolls_over_sunday() {
        assert_due(("2021-02-20", "16:59:59"), 9, ("2021-02-23", "09:59:59"));
    }

    #[test]
    fn test_sunday_submission_rejected() {
        let config = reference_config();
        let result = calculate_due_date(&config, make_datetime("2021-02-21", "15:00:00"), 8);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_evening_submission_rejected() {
        let config = reference_config();
        let result = calculate_due_date(&config, make_datetime("2021-02-22", "19:11:32"), 24);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_boundary_submission_rejected_even_with_zero_turnaround() {
        let config = reference_config();
        for time in ["09:00:00", "17:00:00"] {
            let result = calculate_due_date(&config, make_datetime("2021-02-16", time), 0);
            assert!(result.is_err(), "{} should be rejected", time);
        }
    }

    #[test]
    fn test_zero_turnaround_returns_input() {
        assert_due(("2021-02-16", "14:12:00"), 0, ("2021-02-16", "14:12:00"));
    }

    #[test]
    fn test_negative_turnaround_behaves_like_zero() {
        assert_due(("2021-02-16", "14:12:00"), -3, ("2021-02-16", "14:12:00"));
    }

    #[test]
    fn test_turnaround_within_same_day() {
        assert_due(("2021-02-16", "10:00:00"), 1, ("2021-02-16", "11:00:00"));
        assert_due(("2021-02-16", "09:00:01"), 7, ("2021-02-16", "16:00:01"));
    }

    #[test]
    fn test_budget_ending_at_close_rolls_to_next_start() {
        // 16:00 + 1h is exactly 17:00, which is outside working hours.
        assert_due(("2021-02-16", "16:00:00"), 1, ("2021-02-17", "09:00:00"));
    }

    #[test]
    fn test_budget_ending_at_friday_close_rolls_to_monday() {
        assert_due(("2021-02-26", "16:00:00"), 1, ("2021-03-01", "09:00:00"));
    }

    #[test]
    fn test_full_workday_advances_one_day() {
        assert_due(("2021-02-16", "13:30:00"), 8, ("2021-02-17", "13:30:00"));
    }

    #[test]
    fn test_three_workdays_use_swapped_saturday() {
        // Thursday is off and Saturday is worked instead.
        assert_due(("2021-02-16", "13:30:00"), 24, ("2021-02-20", "13:30:00"));
    }

    #[test]
    fn test_month_and_year_rollover() {
        let config = CalendarConfig::default();
        // 2021-12-31 is a Friday
        let due = calculate_due_date(&config, make_datetime("2021-12-31", "15:00:00"), 4).unwrap();
        assert_eq!(due, make_datetime("2022-01-03", "11:00:00"));
    }

    #[test]
    fn test_leap_day_is_a_working_day() {
        let config = CalendarConfig::default();
        // 2024-02-28 is a Wednesday, 2024-02-29 a Thursday
        let due = calculate_due_date(&config, make_datetime("2024-02-28", "12:00:00"), 8).unwrap();
        assert_eq!(due, make_datetime("2024-02-29", "12:00:00"));
    }

    #[test]
    fn test_custom_window_with_seconds() {
        let config = CalendarConfig::new(
            WorkingHoursWindow::new(
                NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            )
            .unwrap(),
            WeeklyHolidaySet::default(),
            DayOverrideMap::new(),
        );
        // 1h today, 4h tomorrow, 1h the day after
        let due = calculate_due_date(&config, make_datetime("2021-02-16", "11:30:00"), 6).unwrap();
        assert_eq!(due, make_datetime("2021-02-18", "09:30:00"));
    }

    #[test]
    fn test_trace_records_each_visited_day() {
        let config = reference_config();
        let result = calculate_due_date_with_trace(
            &config,
            make_datetime("2021-02-17", "16:59:59"),
            2,
        )
        .unwrap();

        assert_eq!(result.due_at, make_datetime("2021-02-19", "10:59:59"));
        assert_eq!(result.working_seconds(), 2 * SECONDS_PER_HOUR);
        assert_eq!(result.holidays_skipped(), 1);

        let kinds: Vec<_> = result.steps.iter().map(|s| (s.date, s.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (make_date("2021-02-17"), DayKind::Working),
                (make_date("2021-02-18"), DayKind::Holiday),
                (make_date("2021-02-19"), DayKind::Working),
            ]
        );
        assert_eq!(result.steps[0].remaining_seconds, 7199);
    }

    #[test]
    fn test_trace_is_empty_for_zero_turnaround() {
        let config = reference_config();
        let result =
            calculate_due_date_with_trace(&config, make_datetime("2021-02-16", "10:00:00"), 0)
                .unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.due_at, result.submitted_at);
    }

    #[test]
    fn test_skip_trailing_holidays_keeps_time_of_day() {
        let config = reference_config();
        // Sunday evening goes to Monday, same time
        let skipped = skip_trailing_holidays(&config, make_datetime("2021-02-21", "20:15:00"));
        assert_eq!(skipped.unwrap(), make_datetime("2021-02-22", "20:15:00"));
    }

    #[test]
    fn test_skip_trailing_holidays_crosses_run_of_overrides() {
        let overrides: DayOverrideMap = [
            (make_date("2021-12-24"), make_date("2021-12-18")),
            (make_date("2021-12-27"), make_date("2021-12-19")),
            (make_date("2021-12-28"), make_date("2022-01-08")),
        ]
        .into_iter()
        .collect();
        let config = CalendarConfig::new(
            WorkingHoursWindow::default(),
            WeeklyHolidaySet::default(),
            overrides,
        );

        let skipped = skip_trailing_holidays(&config, make_datetime("2021-12-24", "10:00:00"));
        assert_eq!(skipped.unwrap(), make_datetime("2021-12-29", "10:00:00"));
    }

    #[test]
    fn test_skip_trailing_holidays_leaves_working_day_alone() {
        let config = reference_config();
        let timestamp = make_datetime("2021-02-16", "18:00:00");
        assert_eq!(skip_trailing_holidays(&config, timestamp).unwrap(), timestamp);
    }

    #[test]
    fn test_stepping_past_max_date_overflows() {
        let config = CalendarConfig::default();
        let last = NaiveDate::MAX;
        // Pick a weekday late enough that the budget runs off the calendar.
        let mut date = last;
        while is_holiday(&config, date) {
            date = date.pred_opt().unwrap();
        }
        let submitted = date.and_hms_opt(12, 0, 0).unwrap();

        let result = calculate_due_date(&config, submitted, 1_000);
        assert!(matches!(result, Err(EngineError::CalendarOverflow { .. })));
    }

    fn make_precise_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(
            &format!("{} {}", date_str, time_str),
            "%Y-%m-%d %H:%M:%S%.3f",
        )
        .unwrap()
    }

    #[test]
    fn test_milliseconds_carry_to_due_instant() {
        let config = reference_config();
        let due = calculate_due_date(
            &config,
            make_precise_datetime("2021-02-16", "16:59:59.999"),
            2,
        )
        .unwrap();
        assert_eq!(due, make_precise_datetime("2021-02-17", "10:59:59.999"));
    }

    #[test]
    fn test_half_second_past_the_hour_rolls_to_next_morning() {
        let config = reference_config();
        let due = calculate_due_date(
            &config,
            make_precise_datetime("2021-02-16", "16:00:00.500"),
            1,
        )
        .unwrap();
        assert_eq!(due, make_precise_datetime("2021-02-17", "09:00:00.500"));
    }

    #[test]
    fn test_sub_second_submission_within_same_day() {
        let config = reference_config();
        let due = calculate_due_date(
            &config,
            make_precise_datetime("2021-02-16", "09:00:00.250"),
            7,
        )
        .unwrap();
        assert_eq!(due, make_precise_datetime("2021-02-16", "16:00:00.250"));
    }

    #[test]
    fn test_sub_second_trace_still_sums_to_budget() {
        let config = reference_config();
        let result = calculate_due_date_with_trace(
            &config,
            make_precise_datetime("2021-02-17", "16:59:59.999"),
            2,
        )
        .unwrap();
        assert_eq!(result.due_at, make_precise_datetime("2021-02-19", "10:59:59.999"));
        assert_eq!(result.working_seconds(), 2 * SECONDS_PER_HOUR);
    }

    #[test]
    fn test_untraced_consumption_records_nothing() {
        let config = reference_config();
        let submitted = make_datetime("2021-02-16", "10:00:00");
        let budget = 10_000 * SECONDS_PER_HOUR;

        let untraced = consume_turnaround(&config, submitted, budget, None).unwrap();

        let mut steps = Vec::new();
        let traced = consume_turnaround(&config, submitted, budget, Some(&mut steps)).unwrap();

        assert_eq!(untraced, traced);
        assert!(steps.len() > 1_000);
        assert_eq!(
            calculate_due_date(&config, submitted, 10_000).unwrap(),
            untraced
        );
    }

    #[test]
    fn test_record_without_sink_is_a_no_op() {
        let mut sink: Option<&mut Vec<DayStep>> = None;
        record(&mut sink, make_date("2021-02-16"), DayKind::Working, 1, 0);
        assert!(sink.is_none());

        let mut steps = Vec::new();
        let mut sink = Some(&mut steps);
        record(&mut sink, make_date("2021-02-16"), DayKind::Working, 1, 0);
        assert_eq!(steps.len(), 1);
    }
}
