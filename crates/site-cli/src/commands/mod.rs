//! Command handlers for the `sln` binary.

pub mod layout;
pub mod matrix;
pub mod periods;
pub mod schema;

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::debug;

use site_core::entities::StaffingPlan;

/// Read, parse, and boundary-validate a staffing-plan document.
pub fn load_plan(path: &Path) -> anyhow::Result<StaffingPlan> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file '{}'", path.display()))?;
    let plan: StaffingPlan = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse plan file '{}'", path.display()))?;
    plan.validate()
        .with_context(|| format!("plan document '{}' failed validation", path.display()))?;
    debug!(plan_id = %plan.id, items = plan.items.len(), "loaded staffing plan");
    Ok(plan)
}

/// The window anchor date: explicit flag, else the local calendar date.
///
/// The clock is read only here, at the binary's edge; the core always
/// receives `today` as a parameter.
pub fn resolve_today(explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_plan_accepts_minimal_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "plan:test", "granularity": "month"}}"#).unwrap();
        let plan = load_plan(file.path()).unwrap();
        assert_eq!(plan.id, "plan:test");
    }

    #[test]
    fn load_plan_rejects_reversed_item_span() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "id": "plan:bad",
                "granularity": "month",
                "items": [{{
                    "kind": "activity",
                    "id": "act-01",
                    "title": "Demo",
                    "phase": null,
                    "span": {{"start": "2024-06-01", "end": "2024-01-01"}}
                }}]
            }}"#
        )
        .unwrap();
        let err = load_plan(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed validation"));
    }

    #[test]
    fn load_plan_reports_missing_file() {
        let err = load_plan(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn resolve_today_prefers_the_flag() {
        let pinned = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(resolve_today(Some(pinned)), pinned);
    }
}
