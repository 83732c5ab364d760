use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A plan bar: one schedule activity rendered against the shared window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanActivity {
    pub id: String,
    pub title: String,
    /// Construction phase, e.g. `preconstruction`, `structure`, `closeout`.
    pub phase: Option<String>,
    pub span: Interval,
}
