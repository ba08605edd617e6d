//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a calendar
//! configuration from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::DayOverrideMap;

use super::types::CalendarConfig;

/// Loads and provides access to a calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml        # Working hours, weekly holidays, inline overrides
/// └── overrides/           # Optional
///     └── 2021.yaml        # Extra "non-working: working" date pairs
/// ```
///
/// # Example
///
/// ```no_run
/// use due_date_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{}", loader.config());
/// # Ok::<(), due_date_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `calendar.yaml` is missing, if any file contains
    /// invalid YAML or values, or if a non-working date is declared twice.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar_path = path.join("calendar.yaml");
        let calendar = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        let mut pairs: BTreeMap<NaiveDate, NaiveDate> = calendar.overrides().clone().into();
        let overrides_dir = path.join("overrides");
        if overrides_dir.is_dir() {
            for file in Self::yaml_files(&overrides_dir)? {
                let extra = Self::load_yaml::<BTreeMap<NaiveDate, NaiveDate>>(&file)?;
                for (non_working, working) in extra {
                    if pairs.insert(non_working, working).is_some() {
                        return Err(EngineError::invalid_config(
                            "overrides",
                            format!(
                                "{} is declared more than once (again in {})",
                                non_working,
                                file.display()
                            ),
                        ));
                    }
                }
            }
        }

        let config = CalendarConfig::new(
            *calendar.working_hours(),
            calendar.weekly_holidays().clone(),
            DayOverrideMap::from(pairs),
        );

        info!(
            path = %path.display(),
            overrides = config.overrides().len(),
            "Loaded calendar configuration"
        );

        Ok(Self { config })
    }

    /// Loads configuration from a single calendar file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let calendar = Self::load_yaml::<CalendarConfig>(path.as_ref())?;
        Ok(Self::from_calendar(calendar))
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use due_date_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(r#"
    /// working_hours:
    ///   start: "08:00:00"
    ///   end: "16:00:00"
    /// "#)?;
    /// assert_eq!(loader.config().working_hours().start().to_string(), "08:00:00");
    /// # Ok::<(), due_date_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let calendar: CalendarConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_calendar(calendar))
    }

    fn from_calendar(calendar: CalendarConfig) -> Self {
        // Re-run construction so override conflicts are reported.
        let config = CalendarConfig::new(
            *calendar.working_hours(),
            calendar.weekly_holidays().clone(),
            calendar.overrides().clone(),
        );
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Lists the `.yaml` files of a directory in name order.
    fn yaml_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Returns the loaded calendar configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Consumes the loader, returning the calendar configuration.
    pub fn into_config(self) -> CalendarConfig {
        self.config
    }
}
