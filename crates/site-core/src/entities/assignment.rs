use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A staffing bar: one person (or an unfilled seat) holding a role for a span.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StaffAssignment {
    pub id: String,
    pub role_id: String,
    /// Assigned person's name. `None` = open seat still being recruited.
    pub person: Option<String>,
    pub span: Interval,
    /// Fractional full-time-equivalent commitment, >= 0.
    pub fte: f64,
}
