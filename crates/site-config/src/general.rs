//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default period bucketing unit for new plans.
fn default_granularity() -> String {
    String::from("month")
}

/// Default minimum bar width, percent of the window.
const fn default_min_bar_width_pct() -> f64 {
    1.0
}

/// Default FTE quantity for a freshly added assignment.
const fn default_fte() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Granularity applied when a plan doesn't carry one ("week", "month",
    /// "quarter", "year"). Kept as a string here and parsed at the use site
    /// so a bad value surfaces `UnknownGranularity` with the offending text.
    #[serde(default = "default_granularity")]
    pub default_granularity: String,

    /// Minimum rendered bar width so zero-duration items stay clickable.
    #[serde(default = "default_min_bar_width_pct")]
    pub min_bar_width_pct: f64,

    /// FTE quantity pre-filled for new staff assignments.
    #[serde(default = "default_fte")]
    pub default_fte: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_granularity: default_granularity(),
            min_bar_width_pct: default_min_bar_width_pct(),
            default_fte: default_fte(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_granularity, "month");
        assert!((config.min_bar_width_pct - 1.0).abs() < f64::EPSILON);
        assert!((config.default_fte - 1.0).abs() < f64::EPSILON);
    }
}
