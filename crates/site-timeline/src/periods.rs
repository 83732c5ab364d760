//! Period generation: bucketing a date range into granularity boundaries.
//!
//! A `Period` is one column/tick on the timeline: the boundary date of the
//! bucket, tagged with the granularity that produced it. The sequence for an
//! interval is strictly increasing, gap-free, and covers both endpoints'
//! buckets inclusive.

use chrono::{Datelike, Duration, Months, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use site_core::{Granularity, Interval};

use crate::error::TimelineError;

/// One generated boundary date, tagged with its granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Period {
    pub start: NaiveDate,
    pub granularity: Granularity,
}

impl Period {
    /// Stable sparse-matrix key for this period.
    ///
    /// `"2024-01"` (month), `"2024-W05"` (ISO week), `"2024-Q1"` (quarter),
    /// `"2024"` (year). Allocation cells are stored under these keys, so the
    /// format is part of the persisted document contract.
    #[must_use]
    pub fn key(&self) -> String {
        match self.granularity {
            Granularity::Week => {
                let iso = self.start.iso_week();
                format!("{:04}-W{:02}", iso.year(), iso.week())
            }
            Granularity::Month => format!("{:04}-{:02}", self.start.year(), self.start.month()),
            Granularity::Quarter => {
                format!("{:04}-Q{}", self.start.year(), quarter_of(self.start))
            }
            Granularity::Year => format!("{:04}", self.start.year()),
        }
    }

    /// Human column-header label.
    #[must_use]
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Week => {
                let iso = self.start.iso_week();
                format!("W{:02} {}", iso.week(), iso.year())
            }
            Granularity::Month => self.start.format("%b %Y").to_string(),
            Granularity::Quarter => {
                format!("Q{} {}", quarter_of(self.start), self.start.year())
            }
            Granularity::Year => self.start.year().to_string(),
        }
    }
}

/// Produce the ordered period sequence covering `interval` at `granularity`.
///
/// Both bounds align downward to the boundary of the bucket containing them,
/// so the final period covers through the raw end date. A degenerate interval
/// (start == end) yields exactly one period.
///
/// # Errors
///
/// `InvalidInterval` when `interval.start > interval.end`.
pub fn generate_periods(
    interval: &Interval,
    granularity: Granularity,
) -> Result<Vec<Period>, TimelineError> {
    interval.validate()?;

    let last = align_down(interval.end, granularity);
    let mut cursor = align_down(interval.start, granularity);
    let mut periods = Vec::new();
    while cursor <= last {
        periods.push(Period {
            start: cursor,
            granularity,
        });
        cursor = step(cursor, granularity);
    }
    Ok(periods)
}

/// The boundary date of the bucket containing `date`.
fn align_down(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Week => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        Granularity::Month => first_of_month(date.year(), date.month()),
        Granularity::Quarter => {
            let quarter_month = (quarter_of(date) - 1) * 3 + 1;
            first_of_month(date.year(), quarter_month)
        }
        Granularity::Year => first_of_month(date.year(), 1),
    }
}

/// The next bucket boundary after `boundary`.
fn step(boundary: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Week => boundary + Duration::days(7),
        Granularity::Month => boundary + Months::new(1),
        Granularity::Quarter => boundary + Months::new(3),
        Granularity::Year => boundary + Months::new(12),
    }
}

/// 1-based calendar quarter of `date`.
fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Day 1 of a valid month always exists.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}
