use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{PlanActivity, StaffAssignment};
use crate::enums::ItemKind;
use crate::interval::Interval;

/// A renderable timeline entity.
///
/// Closed tagged variant: the dashboard only ever renders staff assignments
/// and plan activities, so the payload is one of exactly those two shapes
/// rather than an open dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineItem {
    Staff(StaffAssignment),
    Activity(PlanActivity),
}

impl TimelineItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Staff(_) => ItemKind::Staff,
            Self::Activity(_) => ItemKind::Activity,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Staff(assignment) => &assignment.id,
            Self::Activity(activity) => &activity.id,
        }
    }

    /// The bar's own span, rendered against the shared window.
    #[must_use]
    pub const fn span(&self) -> &Interval {
        match self {
            Self::Staff(assignment) => &assignment.span,
            Self::Activity(activity) => &activity.span,
        }
    }

    /// Display label: the person (or role id for an open seat) for staff
    /// bars, the activity title for plan bars.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Staff(assignment) => assignment
                .person
                .as_deref()
                .unwrap_or(assignment.role_id.as_str()),
            Self::Activity(activity) => &activity.title,
        }
    }
}
