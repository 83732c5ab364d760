//! Validated date spans.
//!
//! An `Interval` is the one shape of span in the system: the overall visible
//! timeline window and each renderable item's bar both carry one. The
//! invariant `start <= end` is established by [`Interval::new`]; code that
//! receives an interval from an untrusted source (deserialized JSON) calls
//! [`Interval::validate`] at the boundary before handing it to the pure core.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A start/end date pair defining a span, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Interval {
    /// Construct an interval, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        let interval = Self { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Re-check the `start <= end` invariant on an interval that bypassed
    /// [`Interval::new`] (serde derives field-by-field).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start > self.end {
            return Err(CoreError::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Span length in whole days. Zero for a degenerate interval.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `date` falls inside the span, inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Smallest interval covering every interval in `spans`.
    ///
    /// Returns `None` for an empty input; the caller supplies its own
    /// anchor date in that case.
    #[must_use]
    pub fn hull<'a, I>(spans: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut result: Option<Self> = None;
        for span in spans {
            result = Some(match result {
                Some(current) => Self {
                    start: current.start.min(span.start),
                    end: current.end.max(span.end),
                },
                None => *span,
            });
        }
        result
    }
}
