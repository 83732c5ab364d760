//! Entity structs for the Siteline staffing domain.
//!
//! These mirror the JSON documents the dashboard layer exchanges. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema export.

mod activity;
mod allocation;
mod assignment;
mod item;
mod plan;
mod role;

pub use activity::PlanActivity;
pub use allocation::AllocationRow;
pub use assignment::StaffAssignment;
pub use item::TimelineItem;
pub use plan::StaffingPlan;
pub use role::Role;
