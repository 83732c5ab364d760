use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One role's sparse period-key -> quantity mapping (FTE count per bucket).
///
/// Keys follow the period key format for the plan's granularity
/// (`"2024-01"`, `"2024-W05"`, `"2024-Q1"`, `"2024"`). A `BTreeMap` keeps
/// serialization order deterministic, which the grid renderer and the
/// reconciler's idempotence tests both rely on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AllocationRow {
    pub role_id: String,
    #[serde(default)]
    pub cells: BTreeMap<String, f64>,
}

impl AllocationRow {
    #[must_use]
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// The quantity at `period_key`, if the user has entered one.
    #[must_use]
    pub fn value(&self, period_key: &str) -> Option<f64> {
        self.cells.get(period_key).copied()
    }
}
