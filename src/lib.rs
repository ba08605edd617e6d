//! Due Date Engine
//!
//! This crate computes when a piece of work is due, given the timestamp it was
//! submitted and a turnaround expressed in whole working hours. Working time
//! accrues only inside a daily working-hours window, on days that are neither
//! weekly holidays nor overridden as non-working.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::DueDateEngine;
