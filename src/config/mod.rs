//! Configuration loading and management for the Due Date Engine.
//!
//! This module provides the [`CalendarConfig`] bundle and the [`ConfigLoader`]
//! that reads it from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use due_date_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("{}", config.config());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CalendarConfig;
