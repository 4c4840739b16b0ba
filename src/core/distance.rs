use crate::models::{Allocation, DistanceWeights};

/// Calculate the weighted Euclidean distance between two allocations
///
/// # Arguments
/// * `candidate` - A catalog profile's allocation percentages
/// * `target` - The user's allocation percentages
/// * `weights` - Per-category weights applied to the squared deltas
///
/// # Returns
/// Distance in weighted percentage-point space
#[inline]
pub fn allocation_distance(
    candidate: &Allocation,
    target: &Allocation,
    weights: &DistanceWeights,
) -> f64 {
    let d_needs = candidate.needs_pct - target.needs_pct;
    let d_wants = candidate.wants_pct - target.wants_pct;
    let d_savings = candidate.savings_pct - target.savings_pct;

    (weights.needs * d_needs.powi(2)
        + weights.wants * d_wants.powi(2)
        + weights.savings * d_savings.powi(2))
    .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(needs: f64, wants: f64, savings: f64) -> Allocation {
        Allocation {
            needs_pct: needs,
            wants_pct: wants,
            savings_pct: savings,
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = allocation(50.0, 30.0, 20.0);
        let distance = allocation_distance(&a, &a, &DistanceWeights::default());
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_distance_to_self_is_zero_for_any_weights() {
        let a = allocation(62.5, 17.5, 20.0);
        let weights = DistanceWeights {
            needs: 3.7,
            wants: 0.2,
            savings: 11.0,
        };
        assert_eq!(allocation_distance(&a, &a, &weights), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = allocation(50.0, 30.0, 20.0);
        let b = allocation(60.0, 20.0, 20.0);
        let weights = DistanceWeights::default();

        let ab = allocation_distance(&a, &b, &weights);
        let ba = allocation_distance(&b, &a, &weights);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_wants_deviation_weighs_more_than_savings() {
        let target = allocation(50.0, 30.0, 20.0);
        let off_wants = allocation(50.0, 35.0, 15.0);
        let off_savings = allocation(50.0, 25.0, 25.0);
        let weights = DistanceWeights::default();

        // Same 5-point shift, but wants carries weight 1.2 vs savings 0.8
        let wants_distance = allocation_distance(&off_wants, &target, &weights);
        let savings_distance = allocation_distance(&off_savings, &target, &weights);
        assert_eq!(wants_distance, savings_distance);

        // Isolate the categories to see the asymmetry
        let only_wants = allocation_distance(&allocation(50.0, 35.0, 20.0), &target, &weights);
        let only_savings = allocation_distance(&allocation(50.0, 30.0, 25.0), &target, &weights);
        assert!(only_wants > only_savings);
    }

    #[test]
    fn test_known_distance() {
        let target = allocation(50.0, 30.0, 20.0);
        let candidate = allocation(60.0, 20.0, 20.0);

        // sqrt(1.0*100 + 1.2*100 + 0.8*0) = sqrt(220)
        let distance = allocation_distance(&candidate, &target, &DistanceWeights::default());
        assert!((distance - 220.0_f64.sqrt()).abs() < 1e-12);
    }
}
