//! Cross-cutting error types for Siteline.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `TimelineError`, `ConfigError`) are defined in
//! their respective crates and converge on anyhow in `site-cli`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can be raised by any Siteline crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An interval's start date is after its end date.
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    /// A granularity value outside the defined enum was supplied.
    #[error("Unknown granularity: '{0}' (expected week, month, quarter, or year)")]
    UnknownGranularity(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
