//! Allocation-matrix reconciliation and grid totals.
//!
//! When the period axis is recomputed (granularity switch, window change),
//! the sparse role x period table has to be merged against the new columns.
//! Priority per cell: explicit user-entered value, then the role's setup
//! default, then zero. User intent always wins over defaults, and cells keyed
//! outside the new axis are carried through untouched so they reappear when
//! the axis widens back.

use std::collections::BTreeMap;

use site_core::entities::AllocationRow;

use crate::error::TimelineError;
use crate::periods::Period;

/// Merge `existing` rows against a recomputed period axis.
///
/// Returns one row per catalog role, in catalog order. Pure: inputs are never
/// mutated, and the operation is idempotent (a second pass over its own
/// output is a no-op).
///
/// # Errors
///
/// `NegativeAllocation` on the first negative quantity found in an existing
/// cell or a fallback default.
pub fn reconcile(
    existing: &[AllocationRow],
    roles: &[String],
    periods: &[Period],
    fallback: &BTreeMap<String, f64>,
) -> Result<Vec<AllocationRow>, TimelineError> {
    let by_role: BTreeMap<&str, &AllocationRow> = existing
        .iter()
        .map(|row| (row.role_id.as_str(), row))
        .collect();

    let mut reconciled = Vec::with_capacity(roles.len());
    for role in roles {
        let prior = by_role.get(role.as_str());

        let mut cells: BTreeMap<String, f64> = match prior {
            Some(row) => {
                for (period_key, &quantity) in &row.cells {
                    reject_negative(role, period_key, quantity)?;
                }
                row.cells.clone()
            }
            None => BTreeMap::new(),
        };

        for period in periods {
            let key = period.key();
            if cells.contains_key(&key) {
                continue;
            }
            let quantity = match fallback.get(role) {
                Some(&default) => {
                    reject_negative(role, &key, default)?;
                    default
                }
                None => 0.0,
            };
            cells.insert(key, quantity);
        }

        reconciled.push(AllocationRow {
            role_id: role.clone(),
            cells,
        });
    }
    Ok(reconciled)
}

/// Sum of one row's quantities across the current axis only.
#[must_use]
pub fn row_total(row: &AllocationRow, periods: &[Period]) -> f64 {
    periods
        .iter()
        .filter_map(|period| row.value(&period.key()))
        .sum()
}

/// Per-column sums across all rows, keyed by period key.
#[must_use]
pub fn column_totals(rows: &[AllocationRow], periods: &[Period]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for period in periods {
        let key = period.key();
        let sum = rows.iter().filter_map(|row| row.value(&key)).sum();
        totals.insert(key, sum);
    }
    totals
}

fn reject_negative(role: &str, period: &str, quantity: f64) -> Result<(), TimelineError> {
    if quantity < 0.0 {
        return Err(TimelineError::NegativeAllocation {
            role: role.to_string(),
            period: period.to_string(),
            quantity,
        });
    }
    Ok(())
}
