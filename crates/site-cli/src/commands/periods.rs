use site_config::SitelineConfig;
use site_core::{Granularity, Interval};
use site_timeline::generate_periods;
use site_timeline::layout::PeriodColumn;

use crate::cli::{OutputFormat, PeriodsArgs};
use crate::output;

/// Handle `sln periods`.
pub fn handle(
    args: &PeriodsArgs,
    config: &SitelineConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let granularity: Granularity = args
        .granularity
        .as_deref()
        .unwrap_or(&config.general.default_granularity)
        .parse()?;

    let interval = Interval::new(args.start, args.end)?;
    let periods = generate_periods(&interval, granularity)?;
    let columns: Vec<PeriodColumn> = periods.iter().map(PeriodColumn::from).collect();
    output::output(&columns, format)
}
