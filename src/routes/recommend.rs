use crate::catalog::{seed, Catalog};
use crate::core::{derive_adjustments, MatchError, Matcher};
use crate::models::{
    Allocation, CatalogStatsResponse, ErrorResponse, HealthResponse, RecommendRequest,
    RecommendResponse,
};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend))
        .route("/catalog/stats", web::get().to(catalog_stats));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Strategy recommendation endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "income": 3000.0,
///   "needs": 1500.0,
///   "wants": 900.0,
///   "savings": 600.0
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate raw fields
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // The three amounts are the defining breakdown of the income: they must
    // account for every unit of it before any percentage is derived
    let allocated = req.allocated();
    if allocated != req.income {
        tracing::info!(
            "Rejecting unbalanced allocation: amounts sum to {}, income is {}",
            allocated,
            req.income
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unbalanced allocation".to_string(),
            message: format!(
                "category amounts sum to {}, expected income {}",
                allocated, req.income
            ),
            status_code: 400,
        });
    }

    let allocation = Allocation::from_amounts(req.income, req.needs, req.wants, req.savings);

    tracing::debug!(
        "Matching allocation {:.1}/{:.1}/{:.1} against {} profiles",
        allocation.needs_pct,
        allocation.wants_pct,
        allocation.savings_pct,
        state.catalog.len()
    );

    match state.matcher.recommend(&allocation, &state.catalog) {
        Ok(recommendation) => {
            let advice =
                derive_adjustments(&recommendation.allocation, &recommendation.best_match.allocation());

            tracing::info!(
                "Recommending strategy {} (estimated success {:.3}, {} adjustments)",
                recommendation.strategy,
                recommendation.estimated_success,
                advice.len()
            );

            HttpResponse::Ok().json(RecommendResponse {
                strategy_description: seed::strategy_description(&recommendation.strategy)
                    .map(str::to_string),
                strategy: recommendation.strategy,
                estimated_success: recommendation.estimated_success,
                best_match: recommendation.best_match,
                allocation: recommendation.allocation,
                advice,
            })
        }
        Err(err @ MatchError::InvalidAllocation { .. }) => {
            tracing::info!("Rejected allocation: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid allocation".to_string(),
                message: err.to_string(),
                status_code: 400,
            })
        }
        Err(err @ MatchError::EmptyCatalog) => {
            tracing::error!("Recommendation failed: {}", err);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Catalog unavailable".to_string(),
                message: err.to_string(),
                status_code: 503,
            })
        }
    }
}

/// Catalog statistics endpoint
///
/// GET /api/v1/catalog/stats
async fn catalog_stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogStatsResponse {
        profiles: state.catalog.len(),
        strategies: state.catalog.strategies(),
    })
}
