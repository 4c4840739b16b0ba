// Core algorithm exports
pub mod advice;
pub mod distance;
pub mod matcher;

pub use advice::{derive_adjustments, DEAD_ZONE_PCT};
pub use distance::allocation_distance;
pub use matcher::{
    MatchError, Matcher, ALLOCATION_SUM_TOLERANCE, DEFAULT_NEIGHBORS, DISTANCE_EPSILON,
};
