use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a strategy recommendation
///
/// Carries raw monthly amounts; percentage derivation happens server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub income: f64,
    #[validate(range(min = 0.0))]
    pub needs: f64,
    #[validate(range(min = 0.0))]
    pub wants: f64,
    #[validate(range(min = 0.0))]
    pub savings: f64,
}

impl RecommendRequest {
    /// Sum of the three category amounts
    pub fn allocated(&self) -> f64 {
        self.needs + self.wants + self.savings
    }
}
