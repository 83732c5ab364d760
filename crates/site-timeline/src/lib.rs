//! # site-timeline
//!
//! The algorithmic core behind the staffing Gantt and staffing-plan views.
//!
//! Three pure units, composed by the layout module:
//! - `periods`: date range + granularity -> ordered period boundary sequence
//! - `scale`: dates and spans -> normalized [0,100] positions and widths
//! - `allocation`: sparse role x period quantity table reconciled against a
//!   recomputed period axis, plus row/column totals
//!
//! Everything here is synchronous, deterministic, and free of I/O; "now" is
//! always an explicit parameter. The view layer (out of scope) triggers a
//! recompute on every input change and renders the returned values.

pub mod allocation;
pub mod error;
pub mod layout;
pub mod periods;
pub mod scale;

pub use allocation::reconcile;
pub use error::TimelineError;
pub use layout::{compute_layout, PlanLayout};
pub use periods::{generate_periods, Period};
pub use scale::{BarSpan, Scale};
