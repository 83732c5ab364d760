use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use site_config::SitelineConfig;
use site_core::entities::AllocationRow;
use site_timeline::compute_layout;
use site_timeline::layout::PlanLayout;

use crate::cli::{MatrixArgs, OutputFormat};
use crate::output;

/// Grid-only view of a plan layout: the reconciled matrix plus its totals.
#[derive(Debug, Serialize, JsonSchema)]
pub struct MatrixResponse {
    pub plan_id: String,
    pub period_keys: Vec<String>,
    pub matrix: Vec<AllocationRow>,
    pub row_totals: BTreeMap<String, f64>,
    pub column_totals: BTreeMap<String, f64>,
}

impl From<PlanLayout> for MatrixResponse {
    fn from(layout: PlanLayout) -> Self {
        Self {
            plan_id: layout.plan_id,
            period_keys: layout.periods.into_iter().map(|p| p.key).collect(),
            matrix: layout.matrix,
            row_totals: layout.row_totals,
            column_totals: layout.column_totals,
        }
    }
}

/// Handle `sln matrix`.
pub fn handle(
    args: &MatrixArgs,
    config: &SitelineConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let plan = super::load_plan(&args.input)?;
    let today = super::resolve_today(args.today);

    let layout = compute_layout(&plan, today, config.general.min_bar_width_pct)?;
    output::output(&MatrixResponse::from(layout), format)
}
