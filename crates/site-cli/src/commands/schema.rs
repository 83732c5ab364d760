use schemars::schema_for;

use site_core::entities::{AllocationRow, Role, StaffingPlan, TimelineItem};
use site_timeline::layout::{PeriodColumn, PlanLayout};

use crate::cli::{OutputFormat, SchemaArgs};
use crate::output;

/// Handle `sln schema`.
pub fn handle(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let schema = match args.entity.as_str() {
        "plan" => schema_for!(StaffingPlan),
        "layout" => schema_for!(PlanLayout),
        "item" => schema_for!(TimelineItem),
        "role" => schema_for!(Role),
        "allocation-row" => schema_for!(AllocationRow),
        "period" => schema_for!(PeriodColumn),
        other => anyhow::bail!(
            "unknown entity '{other}' (expected plan, layout, item, role, allocation-row, or period)"
        ),
    };
    output::output(&schema, format)
}
