use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{AllocationRow, Role, TimelineItem};
use crate::enums::Granularity;
use crate::errors::CoreError;

/// The externally-owned editor-session document.
///
/// One JSON object bundling everything a recompute pass needs: the item list,
/// the granularity selector, the ordered role catalog, the sparse prior
/// allocation table, and the per-role "apply to whole duration" setup
/// defaults. The collaborator layer (CLI, browser storage) owns persistence;
/// the core only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StaffingPlan {
    /// Opaque namespace identifier, e.g. `"plan:riverside-tower"`.
    pub id: String,
    pub granularity: Granularity,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub items: Vec<TimelineItem>,
    #[serde(default)]
    pub allocations: Vec<AllocationRow>,
    /// Per-role fallback quantity applied to period keys with no explicit cell.
    #[serde(default)]
    pub setup_defaults: BTreeMap<String, f64>,
}

impl StaffingPlan {
    /// Boundary validation for a freshly deserialized plan.
    ///
    /// Serde derives field-by-field, so interval ordering and FTE sign are
    /// re-checked here before the plan reaches the pure core. Negative
    /// allocation cells are left to the reconciler, which reports them with
    /// role and period context.
    pub fn validate(&self) -> Result<(), CoreError> {
        for item in &self.items {
            item.span().validate()?;
            if let TimelineItem::Staff(assignment) = item {
                if assignment.fte < 0.0 {
                    return Err(CoreError::Validation(format!(
                        "assignment '{}' has negative fte {}",
                        assignment.id, assignment.fte
                    )));
                }
            }
        }
        Ok(())
    }

    /// The role catalog's ids in display order.
    #[must_use]
    pub fn role_ids(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StaffAssignment;
    use crate::interval::Interval;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan_with_assignment(fte: f64, start: NaiveDate, end: NaiveDate) -> StaffingPlan {
        StaffingPlan {
            id: "plan:test".into(),
            granularity: Granularity::Month,
            roles: vec![Role {
                id: "pm".into(),
                name: "Project Manager".into(),
                trade: None,
            }],
            items: vec![TimelineItem::Staff(StaffAssignment {
                id: "asn-01".into(),
                role_id: "pm".into(),
                person: None,
                span: Interval { start, end },
                fte,
            })],
            allocations: Vec::new(),
            setup_defaults: BTreeMap::new(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_plan() {
        let plan = plan_with_assignment(1.0, date(2024, 1, 1), date(2024, 6, 30));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn validate_rejects_reversed_item_span() {
        let plan = plan_with_assignment(1.0, date(2024, 6, 30), date(2024, 1, 1));
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInterval { .. }));
    }

    #[test]
    fn validate_rejects_negative_fte() {
        let plan = plan_with_assignment(-0.5, date(2024, 1, 1), date(2024, 6, 30));
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn role_ids_preserve_catalog_order() {
        let mut plan = plan_with_assignment(1.0, date(2024, 1, 1), date(2024, 6, 30));
        plan.roles.push(Role {
            id: "superintendent".into(),
            name: "Superintendent".into(),
            trade: Some("field".into()),
        });
        assert_eq!(plan.role_ids(), vec!["pm", "superintendent"]);
    }

    #[test]
    fn plan_deserializes_with_sparse_fields() {
        let json = r#"{"id": "plan:bare", "granularity": "quarter"}"#;
        let plan: StaffingPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.granularity, Granularity::Quarter);
        assert!(plan.roles.is_empty());
        assert!(plan.items.is_empty());
    }
}
