//! Timeline error types for site-timeline.

/// Errors from period generation, coordinate mapping, and reconciliation.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// Error from the shared core types (invalid interval, unknown granularity).
    #[error(transparent)]
    Core(#[from] site_core::CoreError),

    /// The reconciler received a quantity below zero.
    #[error("negative allocation for role '{role}' at period '{period}': {quantity}")]
    NegativeAllocation {
        role: String,
        period: String,
        quantity: f64,
    },
}
