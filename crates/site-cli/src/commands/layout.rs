use tracing::debug;

use site_config::SitelineConfig;
use site_timeline::compute_layout;

use crate::cli::{LayoutArgs, OutputFormat};
use crate::output;

/// Handle `sln layout`.
pub fn handle(
    args: &LayoutArgs,
    config: &SitelineConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let plan = super::load_plan(&args.input)?;
    let today = super::resolve_today(args.today);

    let layout = compute_layout(&plan, today, config.general.min_bar_width_pct)?;
    debug!(
        plan_id = %layout.plan_id,
        periods = layout.periods.len(),
        items = layout.items.len(),
        "computed plan layout"
    );
    output::output(&layout, format)
}
