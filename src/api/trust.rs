//! Trust Scoring API Endpoints
//!
//! Evaluation plus monitoring/governance endpoints for the tier thresholds.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::scoring::{TierThresholds, TrustMetrics, TrustScorer, TrustVerdict};

/// API state for trust scoring endpoints
#[derive(Clone)]
pub struct TrustApiState {
    pub scorer: Arc<RwLock<TrustScorer>>,
    pub admin_api_key: Option<String>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct TrustEvaluationResponse {
    pub verdict: TrustVerdict,
    pub evaluated_at: String,
}

#[derive(Debug, Serialize)]
pub struct ThresholdsResponse {
    pub normal_threshold: i32,
    pub review_threshold: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateThresholdsRequest {
    pub normal_threshold: Option<i32>,
    pub review_threshold: Option<i32>,
    pub admin_api_key: String,
}

// Endpoints

/// POST /trust/evaluate - Score a behavioral snapshot
pub async fn evaluate(
    State(state): State<TrustApiState>,
    Json(metrics): Json<TrustMetrics>,
) -> Json<TrustEvaluationResponse> {
    let scorer = state.scorer.read().await;
    let verdict = scorer.evaluate(&metrics);

    Json(TrustEvaluationResponse {
        verdict,
        evaluated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /trust/thresholds - Get current tier thresholds
pub async fn get_thresholds(State(state): State<TrustApiState>) -> Json<ThresholdsResponse> {
    let scorer = state.scorer.read().await;
    let thresholds = scorer.thresholds();

    Json(ThresholdsResponse {
        normal_threshold: thresholds.normal_min,
        review_threshold: thresholds.review_min,
    })
}

/// PUT /trust/thresholds - Update tier thresholds (governance only)
pub async fn update_thresholds(
    State(state): State<TrustApiState>,
    Json(payload): Json<UpdateThresholdsRequest>,
) -> Result<Json<ThresholdsResponse>, (StatusCode, String)> {
    // Validate admin API key
    if let Some(ref admin_key) = state.admin_api_key {
        if &payload.admin_api_key != admin_key {
            return Err((StatusCode::FORBIDDEN, "Invalid admin API key".to_string()));
        }
    } else {
        return Err((
            StatusCode::FORBIDDEN,
            "Admin API key not configured".to_string(),
        ));
    }

    let mut scorer = state.scorer.write().await;
    let current = scorer.thresholds();

    let new_thresholds = TierThresholds {
        normal_min: payload.normal_threshold.unwrap_or(current.normal_min),
        review_min: payload.review_threshold.unwrap_or(current.review_min),
    };

    if new_thresholds.review_min >= new_thresholds.normal_min {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Review threshold ({}) must be below normal threshold ({})",
                new_thresholds.review_min, new_thresholds.normal_min
            ),
        ));
    }

    scorer.set_thresholds(new_thresholds);

    Ok(Json(ThresholdsResponse {
        normal_threshold: new_thresholds.normal_min,
        review_threshold: new_thresholds.review_min,
    }))
}

/// Create the trust scoring API router
pub fn create_trust_router(state: TrustApiState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/thresholds", get(get_thresholds).put(update_thresholds))
        .with_state(state)
}
