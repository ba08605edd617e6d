//! Error types for the Due Date Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a calendar or
//! computing a due date.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the Due Date Engine.
///
/// # Example
///
/// ```
/// use due_date_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The submission timestamp is not strictly inside working hours on a working day.
    #[error("This time is not during working hours: {timestamp}")]
    InvalidInput {
        /// The rejected submission timestamp.
        timestamp: NaiveDateTime,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Day stepping ran past the representable calendar range.
    #[error("Calendar overflow stepping past {date}")]
    CalendarOverflow {
        /// The last date that could be represented.
        date: NaiveDate,
    },
}

impl EngineError {
    pub(crate) fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_timestamp() {
        let error = EngineError::InvalidInput {
            timestamp: NaiveDate::from_ymd_opt(2021, 2, 18)
                .unwrap()
                .and_hms_opt(10, 45, 23)
                .unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "This time is not during working hours: 2021-02-18 10:45:23"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::invalid_config("working_hours", "start must be before end");
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'working_hours': start must be before end"
        );
    }

    #[test]
    fn test_calendar_overflow_displays_date() {
        let error = EngineError::CalendarOverflow {
            date: NaiveDate::MAX,
        };
        assert!(error.to_string().starts_with("Calendar overflow stepping past"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
