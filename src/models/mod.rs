// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Adjustment, AdjustmentDirection, Allocation, Category, DistanceWeights, Profile,
    RawProfileRow, Recommendation,
};
pub use requests::RecommendRequest;
pub use responses::{CatalogStatsResponse, ErrorResponse, HealthResponse, RecommendResponse};
