//! Coordinate mapping: dates and spans onto a normalized [0,100] axis.
//!
//! The view layer positions bars with CSS-style percentage offsets, so the
//! scale converts absolute dates into `left`/`width` percentages relative to
//! the visible window. Positions clamp to the window; widths keep a minimum
//! floor so zero-duration items remain visible and clickable.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use site_core::Interval;

use crate::error::TimelineError;

/// Default minimum bar width, in percent of the window.
pub const DEFAULT_MIN_WIDTH_PCT: f64 = 1.0;

/// Horizontal placement of one bar, in percent of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BarSpan {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Maps dates within a fixed visible window to [0,100] percentages.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    window: Interval,
    min_width_pct: f64,
}

impl Scale {
    /// Build a scale over `window`.
    ///
    /// # Errors
    ///
    /// `InvalidInterval` when the window's start is after its end. A
    /// zero-length window is accepted; see [`Scale::position`] and
    /// [`Scale::width`] for its defined fallbacks.
    pub fn new(window: Interval, min_width_pct: f64) -> Result<Self, TimelineError> {
        window.validate()?;
        Ok(Self {
            window,
            min_width_pct,
        })
    }

    #[must_use]
    pub const fn window(&self) -> &Interval {
        &self.window
    }

    /// Percentage position of `date` within the window, clamped to [0,100].
    ///
    /// A zero-length window maps every date to 0.0 rather than dividing by
    /// zero.
    #[must_use]
    pub fn position(&self, date: NaiveDate) -> f64 {
        let window_days = self.window.days();
        if window_days == 0 {
            return 0.0;
        }
        let offset_days = (date - self.window.start).num_days();
        let pct = offset_days as f64 / window_days as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    /// Percentage width of `span` within the window.
    ///
    /// Floored at the configured minimum and capped at 100 so a bar never
    /// overflows its lane. A zero-length window yields the floor.
    #[must_use]
    pub fn width(&self, span: &Interval) -> f64 {
        let floor = self.min_width_pct.min(100.0);
        let window_days = self.window.days();
        if window_days == 0 {
            return floor;
        }
        let pct = span.days() as f64 / window_days as f64 * 100.0;
        pct.clamp(floor, 100.0)
    }

    /// Position and width of one bar in a single call.
    #[must_use]
    pub fn place(&self, span: &Interval) -> BarSpan {
        BarSpan {
            left_pct: self.position(span.start),
            width_pct: self.width(span),
        }
    }
}
