use serde::{Deserialize, Serialize};
use crate::models::domain::{Adjustment, Allocation, Profile};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub strategy: String,
    #[serde(rename = "estimatedSuccess")]
    pub estimated_success: f64,
    #[serde(rename = "strategyDescription")]
    pub strategy_description: Option<String>,
    #[serde(rename = "bestMatch")]
    pub best_match: Profile,
    pub allocation: Allocation,
    pub advice: Vec<Adjustment>,
}

/// Response for the catalog stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatsResponse {
    pub profiles: usize,
    pub strategies: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
