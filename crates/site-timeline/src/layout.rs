//! Whole-plan layout derivation.
//!
//! One reactive recompute pass of the staffing view, as a pure function:
//! derive the visible window from the item list, bucket it into periods,
//! place every bar, and reconcile the allocation grid. The caller supplies
//! `today` explicitly so an empty plan still anchors deterministically.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use site_core::entities::{AllocationRow, StaffingPlan, TimelineItem};
use site_core::enums::ItemKind;
use site_core::{Granularity, Interval};

use crate::allocation;
use crate::error::TimelineError;
use crate::periods::{generate_periods, Period};
use crate::scale::{BarSpan, Scale};

/// One column header of the timeline grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PeriodColumn {
    pub key: String,
    pub label: String,
    pub start: NaiveDate,
}

impl From<&Period> for PeriodColumn {
    fn from(period: &Period) -> Self {
        Self {
            key: period.key(),
            label: period.label(),
            start: period.start,
        }
    }
}

/// One positioned bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlacedItem {
    pub id: String,
    pub kind: ItemKind,
    pub label: String,
    pub bar: BarSpan,
}

/// Everything the staffing view renders for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlanLayout {
    pub plan_id: String,
    pub granularity: Granularity,
    pub window: Interval,
    pub periods: Vec<PeriodColumn>,
    pub items: Vec<PlacedItem>,
    pub matrix: Vec<AllocationRow>,
    /// Per-role sums over the current axis, keyed by role id.
    pub row_totals: BTreeMap<String, f64>,
    /// Per-column sums over all roles, keyed by period key.
    pub column_totals: BTreeMap<String, f64>,
}

/// Run one full recompute pass over `plan`.
///
/// The window is the hull of all item spans; an empty plan anchors a
/// degenerate window at `today`.
///
/// # Errors
///
/// Boundary validation failures from the plan, `InvalidInterval` from window
/// construction, and `NegativeAllocation` from reconciliation.
pub fn compute_layout(
    plan: &StaffingPlan,
    today: NaiveDate,
    min_width_pct: f64,
) -> Result<PlanLayout, TimelineError> {
    plan.validate()?;

    let window =
        Interval::hull(plan.items.iter().map(TimelineItem::span)).unwrap_or(Interval {
            start: today,
            end: today,
        });

    let periods = generate_periods(&window, plan.granularity)?;
    let scale = Scale::new(window, min_width_pct)?;

    let items = plan
        .items
        .iter()
        .map(|item| PlacedItem {
            id: item.id().to_string(),
            kind: item.kind(),
            label: item.label().to_string(),
            bar: scale.place(item.span()),
        })
        .collect();

    let roles = plan.role_ids();
    let matrix = allocation::reconcile(&plan.allocations, &roles, &periods, &plan.setup_defaults)?;

    let row_totals = matrix
        .iter()
        .map(|row| (row.role_id.clone(), allocation::row_total(row, &periods)))
        .collect();
    let column_totals = allocation::column_totals(&matrix, &periods);

    Ok(PlanLayout {
        plan_id: plan.id.clone(),
        granularity: plan.granularity,
        window,
        periods: periods.iter().map(PeriodColumn::from).collect(),
        items,
        matrix,
        row_totals,
        column_totals,
    })
}
