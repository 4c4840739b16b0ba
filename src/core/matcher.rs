use crate::catalog::Catalog;
use crate::core::distance::allocation_distance;
use crate::models::{Allocation, DistanceWeights, Profile, Recommendation};
use thiserror::Error;

/// Absolute tolerance on the user percentage sum around 100
///
/// Guards against caller rounding errors; the catalog's own rows are held to
/// exact amount equality at build time.
pub const ALLOCATION_SUM_TOLERANCE: f64 = 0.1;

/// Added to each neighbor distance before inverting, so an exact match
/// (distance 0) does not divide by zero
pub const DISTANCE_EPSILON: f64 = 0.001;

/// Number of neighbors consulted by default
pub const DEFAULT_NEIGHBORS: usize = 3;

/// Errors produced while matching a user allocation
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("allocation percentages sum to {sum:.3}, expected 100 within 0.1")]
    InvalidAllocation { sum: f64 },

    #[error("catalog contains no profiles")]
    EmptyCatalog,
}

/// Nearest-neighbor strategy matcher
///
/// Ranks every catalog profile by weighted allocation distance, consults the
/// closest `neighbors`, and aggregates them into a recommendation:
/// majority vote on the strategy label, distance-weighted average of the
/// observed success rates, closest profile as the best match.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: DistanceWeights,
    neighbors: usize,
}

impl Matcher {
    pub fn new(weights: DistanceWeights, neighbors: usize) -> Self {
        Self { weights, neighbors }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: DistanceWeights::default(),
            neighbors: DEFAULT_NEIGHBORS,
        }
    }

    /// Recommend a strategy for the given user allocation
    ///
    /// The catalog is never mutated; identical inputs produce bit-identical
    /// results. A catalog smaller than `neighbors` is consulted in full.
    pub fn recommend(
        &self,
        allocation: &Allocation,
        catalog: &Catalog,
    ) -> Result<Recommendation, MatchError> {
        let sum = allocation.sum();
        if (sum - 100.0).abs() > ALLOCATION_SUM_TOLERANCE {
            return Err(MatchError::InvalidAllocation { sum });
        }

        if catalog.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        // Distance to every profile, in catalog order
        let mut ranked: Vec<(f64, &Profile)> = catalog
            .entries()
            .iter()
            .map(|profile| {
                let distance =
                    allocation_distance(&profile.allocation(), allocation, &self.weights);
                (distance, profile)
            })
            .collect();

        // Stable ascending sort: equal distances keep catalog insertion order
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let k = self.neighbors.min(ranked.len());
        let nearest = &ranked[..k];

        Ok(Recommendation {
            strategy: vote_strategy(nearest),
            estimated_success: weighted_success(nearest),
            best_match: nearest[0].1.clone(),
            allocation: *allocation,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Mode of the neighbor strategy labels
///
/// Neighbors arrive in ascending-distance order and only a strictly higher
/// count displaces the current winner, so frequency ties resolve to the
/// label of the closest profile.
fn vote_strategy(nearest: &[(f64, &Profile)]) -> String {
    let mut winner: Option<(&str, usize)> = None;

    for (_, profile) in nearest {
        let count = nearest
            .iter()
            .filter(|(_, other)| other.strategy == profile.strategy)
            .count();

        match winner {
            Some((_, best_count)) if count <= best_count => {}
            _ => winner = Some((profile.strategy.as_str(), count)),
        }
    }

    winner.map(|(label, _)| label.to_string()).unwrap_or_default()
}

/// Distance-weighted average of the neighbor success rates
fn weighted_success(nearest: &[(f64, &Profile)]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for (distance, profile) in nearest {
        let weight = 1.0 / (distance + DISTANCE_EPSILON);
        weighted_sum += weight * profile.success_rate;
        weight_total += weight;
    }

    weighted_sum / weight_total
}
