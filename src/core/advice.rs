use crate::models::{Adjustment, AdjustmentDirection, Allocation, Category};

/// Deviations inside this band (percentage points, inclusive) are not
/// actionable
pub const DEAD_ZONE_PCT: f64 = 2.0;

/// Derive per-category adjustments toward the best-matching allocation
///
/// Deltas are best-match minus user, evaluated in needs, wants, savings
/// order. An empty result means the allocation is already in line with the
/// recommended strategy.
pub fn derive_adjustments(user: &Allocation, best: &Allocation) -> Vec<Adjustment> {
    let deltas = [
        (Category::Needs, best.needs_pct - user.needs_pct),
        (Category::Wants, best.wants_pct - user.wants_pct),
        (Category::Savings, best.savings_pct - user.savings_pct),
    ];

    deltas
        .into_iter()
        .filter_map(|(category, delta)| {
            let direction = if delta > DEAD_ZONE_PCT {
                AdjustmentDirection::Increase
            } else if delta < -DEAD_ZONE_PCT {
                AdjustmentDirection::Decrease
            } else {
                return None;
            };

            Some(Adjustment {
                category,
                direction,
                magnitude: delta.abs(),
            })
        })
        .collect()
}
