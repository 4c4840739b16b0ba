pub mod seed;

use crate::models::{Profile, RawProfileRow};
use std::sync::{Arc, Mutex, OnceLock};
use thiserror::Error;

/// Errors raised while validating catalog rows
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("row {row}: income must be positive, got {income}")]
    NonPositiveIncome { row: u32, income: f64 },

    #[error("row {row}: {category} amount must be non-negative, got {amount}")]
    NegativeAmount {
        row: u32,
        category: &'static str,
        amount: f64,
    },

    #[error("row {row}: category amounts sum to {sum}, expected income {income}")]
    AllocationMismatch { row: u32, sum: f64, income: f64 },
}

/// Immutable, ordered collection of validated historical profiles
///
/// Built once from raw tabular rows; consumers only ever see a read-only
/// view through [`Catalog::entries`].
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    /// Build a catalog from raw source rows, deriving category percentages
    ///
    /// Fails on the first invalid row: non-positive income, negative amount,
    /// or amounts that do not sum exactly to the income. Exact equality is
    /// intentional here, the amounts are the defining category breakdown.
    pub fn build(rows: impl IntoIterator<Item = RawProfileRow>) -> Result<Self, CatalogError> {
        let profiles = rows
            .into_iter()
            .map(validate_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { profiles })
    }

    /// Read-only view of the profiles, in insertion order
    pub fn entries(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Distinct strategy labels, in first-appearance order
    pub fn strategies(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for profile in &self.profiles {
            if !labels.iter().any(|label| label == &profile.strategy) {
                labels.push(profile.strategy.clone());
            }
        }
        labels
    }
}

fn validate_row(row: RawProfileRow) -> Result<Profile, CatalogError> {
    if row.income <= 0.0 {
        return Err(CatalogError::NonPositiveIncome {
            row: row.id,
            income: row.income,
        });
    }

    for (category, amount) in [
        ("needs", row.needs),
        ("wants", row.wants),
        ("savings", row.savings),
    ] {
        if amount < 0.0 {
            return Err(CatalogError::NegativeAmount {
                row: row.id,
                category,
                amount,
            });
        }
    }

    let sum = row.needs + row.wants + row.savings;
    if sum != row.income {
        return Err(CatalogError::AllocationMismatch {
            row: row.id,
            sum,
            income: row.income,
        });
    }

    Ok(Profile {
        id: row.id,
        income: row.income,
        needs: row.needs,
        wants: row.wants,
        savings: row.savings,
        needs_pct: row.needs / row.income * 100.0,
        wants_pct: row.wants / row.income * 100.0,
        savings_pct: row.savings / row.income * 100.0,
        strategy: row.strategy,
        success_rate: row.success_rate,
    })
}

/// Once-only memoization of a built catalog
///
/// Construction is idempotent, so the result is computed once and shared for
/// the process lifetime. The mutex serializes racing first callers: exactly
/// one build runs and every caller observes the same immutable catalog.
#[derive(Debug, Default)]
pub struct CatalogCache {
    cell: OnceLock<Arc<Catalog>>,
    build_lock: Mutex<()>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog, building it on first use
    ///
    /// A failed build stores nothing; the next caller retries.
    pub fn get_or_build<F>(&self, build: F) -> Result<Arc<Catalog>, CatalogError>
    where
        F: FnOnce() -> Result<Catalog, CatalogError>,
    {
        if let Some(catalog) = self.cell.get() {
            return Ok(Arc::clone(catalog));
        }

        let _guard = match self.build_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Another caller may have finished while we waited on the lock
        if let Some(catalog) = self.cell.get() {
            return Ok(Arc::clone(catalog));
        }

        let built = Arc::new(build()?);
        let stored = self.cell.get_or_init(|| Arc::clone(&built));
        Ok(Arc::clone(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        id: u32,
        income: f64,
        needs: f64,
        wants: f64,
        savings: f64,
    ) -> RawProfileRow {
        RawProfileRow {
            id,
            income,
            needs,
            wants,
            savings,
            strategy: "50/30/20".to_string(),
            success_rate: 0.8,
        }
    }

    #[test]
    fn test_build_derives_percentages() {
        let catalog = Catalog::build(vec![row(1, 2000.0, 1000.0, 600.0, 400.0)])
            .expect("valid row");

        let profile = &catalog.entries()[0];
        assert_eq!(profile.needs_pct, 50.0);
        assert_eq!(profile.wants_pct, 30.0);
        assert_eq!(profile.savings_pct, 20.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let catalog = Catalog::build(seed::reference_rows()).expect("seed rows are valid");

        for profile in catalog.entries() {
            let sum = profile.needs_pct + profile.wants_pct + profile.savings_pct;
            assert!(
                (sum - 100.0).abs() < 1e-9,
                "profile {} sums to {}",
                profile.id,
                sum
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_income() {
        let result = Catalog::build(vec![row(1, 0.0, 0.0, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(CatalogError::NonPositiveIncome { row: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_amount() {
        let result = Catalog::build(vec![row(7, 1000.0, 1100.0, -300.0, 200.0)]);
        assert!(matches!(
            result,
            Err(CatalogError::NegativeAmount {
                row: 7,
                category: "wants",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_amount_mismatch() {
        // One unit short of the income must fail, the check is exact
        let result = Catalog::build(vec![row(3, 1000.0, 600.0, 300.0, 99.0)]);
        assert!(matches!(
            result,
            Err(CatalogError::AllocationMismatch { row: 3, .. })
        ));
    }

    #[test]
    fn test_exact_amount_sum_passes() {
        let result = Catalog::build(vec![row(3, 1000.0, 600.0, 300.0, 100.0)]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_strategies_deduplicated_in_order() {
        let catalog = Catalog::build(seed::reference_rows()).expect("seed rows are valid");
        let strategies = catalog.strategies();

        assert_eq!(
            strategies,
            vec!["50/30/20", "60/20/20", "40/40/20", "70/20/10"]
        );
    }

    #[test]
    fn test_cache_builds_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let cache = CatalogCache::new();
        let builds = AtomicUsize::new(0);

        for _ in 0..3 {
            let catalog = cache
                .get_or_build(|| {
                    builds.fetch_add(1, Ordering::SeqCst);
                    Catalog::build(seed::reference_rows())
                })
                .expect("build succeeds");
            assert_eq!(catalog.len(), 5);
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_retries_after_failed_build() {
        let cache = CatalogCache::new();

        let failed = cache.get_or_build(|| Catalog::build(vec![row(1, -5.0, 0.0, 0.0, 0.0)]));
        assert!(failed.is_err());

        let recovered = cache.get_or_build(|| Catalog::build(seed::reference_rows()));
        assert!(recovered.is_ok());
    }
}
