//! # Reporting Projections
//!
//! Pure derived views over a catalog snapshot, recomputed on every read.
//! No caching and no invalidation are needed because the inputs are
//! immutable snapshots handed in by the caller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Projections                              │
//! │                                                                         │
//! │  catalog snapshot ──┬──► inventory_value()      Σ price × stock        │
//! │                     ├──► low_stock_count()      stock < threshold      │
//! │                     ├──► expiring_soon_count()  now < expiry <= now+30d│
//! │                     ├──► recent_medicines()     newest 5, stable ties  │
//! │                     └──► category_breakdown()   counts + percentages   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Medicine;

/// Category name used for medicines with a missing or empty category.
pub const UNCATEGORIZED: &str = "Uncategorized";

// =============================================================================
// Scalar Projections
// =============================================================================

/// Total value of stock on hand: Σ `price × stock` over the catalog.
pub fn inventory_value(catalog: &[Medicine]) -> Money {
    catalog
        .iter()
        .map(|m| m.price.multiply_quantity(m.stock))
        .sum()
}

/// Count of medicines with `stock < threshold`.
///
/// The dashboard uses [`crate::LOW_STOCK_THRESHOLD`] (10).
pub fn low_stock_count(catalog: &[Medicine], threshold: i64) -> usize {
    catalog.iter().filter(|m| m.stock < threshold).count()
}

/// Count of medicines expiring within the horizon.
///
/// ## Boundary Rules
/// - `expiry_date <= now` is already expired and NOT counted
/// - `expiry_date == now + horizon_days` is exactly at the edge and IS
///   counted (the window is half-open: strictly after now, at or before
///   the horizon)
pub fn expiring_soon_count(
    catalog: &[Medicine],
    now: DateTime<Utc>,
    horizon_days: i64,
) -> usize {
    let horizon = now + Duration::days(horizon_days);
    catalog
        .iter()
        .filter(|m| m.expiry_date > now && m.expiry_date <= horizon)
        .count()
}

// =============================================================================
// Recently Added
// =============================================================================

/// The `limit` most recently created medicines, newest first.
///
/// Ties on `created_at` keep their original catalog order (stable sort).
pub fn recent_medicines(catalog: &[Medicine], limit: usize) -> Vec<&Medicine> {
    let mut sorted: Vec<&Medicine> = catalog.iter().collect();
    // Vec::sort_by is stable, so equal timestamps preserve insertion order.
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

// =============================================================================
// Category Breakdown
// =============================================================================

/// One row of the category distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
    /// `count / total × 100`. Zero-sized catalogs divide by 1, so an empty
    /// catalog yields an empty list rather than a division error.
    pub percentage: f64,
}

/// Count and percentage per distinct category, descending by count.
///
/// Medicines with a missing or empty category are bucketed together under
/// [`UNCATEGORIZED`]. Ties keep first-seen order.
pub fn category_breakdown(catalog: &[Medicine]) -> Vec<CategoryStat> {
    // First-seen order, so tied categories come out deterministically.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for medicine in catalog {
        let name = match medicine.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        };
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }

    let total = catalog.len().max(1);
    let mut stats: Vec<CategoryStat> = counts
        .into_iter()
        .map(|(name, count)| CategoryStat {
            name: name.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

// =============================================================================
// Unit Tests
// =============================================================================
