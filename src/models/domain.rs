use serde::{Deserialize, Serialize};

/// Historical budget profile with a known outcome
///
/// Percentages are derived from the raw amounts at catalog build time and
/// always sum to 100 within floating tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub income: f64,
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
    #[serde(rename = "needsPct")]
    pub needs_pct: f64,
    #[serde(rename = "wantsPct")]
    pub wants_pct: f64,
    #[serde(rename = "savingsPct")]
    pub savings_pct: f64,
    pub strategy: String,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
}

impl Profile {
    /// The profile's allocation as percentages, for distance queries
    pub fn allocation(&self) -> Allocation {
        Allocation {
            needs_pct: self.needs_pct,
            wants_pct: self.wants_pct,
            savings_pct: self.savings_pct,
        }
    }
}

/// Unvalidated row from the tabular reference source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfileRow {
    pub id: u32,
    pub income: f64,
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
    pub strategy: String,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
}

/// A needs/wants/savings split expressed as percentages of income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "needsPct")]
    pub needs_pct: f64,
    #[serde(rename = "wantsPct")]
    pub wants_pct: f64,
    #[serde(rename = "savingsPct")]
    pub savings_pct: f64,
}

impl Allocation {
    /// Derive percentages from raw monthly amounts
    pub fn from_amounts(income: f64, needs: f64, wants: f64, savings: f64) -> Self {
        Self {
            needs_pct: needs / income * 100.0,
            wants_pct: wants / income * 100.0,
            savings_pct: savings / income * 100.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.needs_pct + self.wants_pct + self.savings_pct
    }
}

/// Distance weights per category
///
/// Wants deviations are penalized more heavily than savings deviations:
/// a savings shortfall is considered more tolerable than lifestyle-spending
/// drift when ranking neighbors.
#[derive(Debug, Clone, Copy)]
pub struct DistanceWeights {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Default for DistanceWeights {
    fn default() -> Self {
        Self {
            needs: 1.0,
            wants: 1.2,
            savings: 0.8,
        }
    }
}

/// Budget category, in advice ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Needs,
    Wants,
    Savings,
}

/// Direction of a suggested adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    Increase,
    Decrease,
}

/// A single actionable adjustment toward the best-matching profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub category: Category,
    pub direction: AdjustmentDirection,
    /// Absolute delta in percentage points
    pub magnitude: f64,
}

/// Result of a strategy recommendation
///
/// Pure output record: holds value copies only, never references back into
/// the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: String,
    #[serde(rename = "estimatedSuccess")]
    pub estimated_success: f64,
    #[serde(rename = "bestMatch")]
    pub best_match: Profile,
    pub allocation: Allocation,
}
