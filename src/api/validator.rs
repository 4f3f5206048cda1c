//! Validator Eligibility API Endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::policy::SqlLevel;
use crate::validator::{ValidatorEvaluator, ValidatorMetrics, ValidatorRequirements, ValidatorVerdict};

/// API state for validator eligibility endpoints
#[derive(Clone)]
pub struct ValidatorApiState {
    pub evaluator: Arc<RwLock<ValidatorEvaluator>>,
    pub admin_api_key: Option<String>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct ValidatorEvaluationResponse {
    pub verdict: ValidatorVerdict,
    pub evaluated_at: String,
}

#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub min_locked_coins: f64,
    pub min_wallet_balance: f64,
    pub min_sql_level: SqlLevel,
    pub max_complaint_ratio: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequirementsRequest {
    pub min_locked_coins: Option<f64>,
    pub min_wallet_balance: Option<f64>,
    pub min_sql_level: Option<SqlLevel>,
    pub max_complaint_ratio: Option<f64>,
    pub admin_api_key: String,
}

// Endpoints

/// POST /validator/evaluate - Check a staking/account snapshot
pub async fn evaluate(
    State(state): State<ValidatorApiState>,
    Json(metrics): Json<ValidatorMetrics>,
) -> Json<ValidatorEvaluationResponse> {
    let evaluator = state.evaluator.read().await;
    let verdict = evaluator.evaluate(&metrics);

    Json(ValidatorEvaluationResponse {
        verdict,
        evaluated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /validator/requirements - Get current gate requirements
pub async fn get_requirements(
    State(state): State<ValidatorApiState>,
) -> Json<RequirementsResponse> {
    let evaluator = state.evaluator.read().await;
    let requirements = evaluator.requirements();

    Json(RequirementsResponse {
        min_locked_coins: requirements.min_locked_coins,
        min_wallet_balance: requirements.min_wallet_balance,
        min_sql_level: requirements.min_sql_level,
        max_complaint_ratio: requirements.max_complaint_ratio,
    })
}

/// PUT /validator/requirements - Update gate requirements (governance only)
pub async fn update_requirements(
    State(state): State<ValidatorApiState>,
    Json(payload): Json<UpdateRequirementsRequest>,
) -> Result<Json<RequirementsResponse>, (StatusCode, String)> {
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

    let mut evaluator = state.evaluator.write().await;
    let current = evaluator.requirements();

    let new_requirements = ValidatorRequirements {
        min_locked_coins: payload.min_locked_coins.unwrap_or(current.min_locked_coins),
        min_wallet_balance: payload
            .min_wallet_balance
            .unwrap_or(current.min_wallet_balance),
        min_sql_level: payload.min_sql_level.unwrap_or(current.min_sql_level),
        max_complaint_ratio: payload
            .max_complaint_ratio
            .unwrap_or(current.max_complaint_ratio),
    };

    if new_requirements.min_locked_coins < 0.0 || new_requirements.min_wallet_balance < 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Balance floors cannot be negative".to_string(),
        ));
    }

    if new_requirements.max_complaint_ratio <= 0.0 || new_requirements.max_complaint_ratio > 1.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Max complaint ratio must be within (0, 1], got {}",
                new_requirements.max_complaint_ratio
            ),
        ));
    }

    evaluator.set_requirements(new_requirements);

    Ok(Json(RequirementsResponse {
        min_locked_coins: new_requirements.min_locked_coins,
        min_wallet_balance: new_requirements.min_wallet_balance,
        min_sql_level: new_requirements.min_sql_level,
        max_complaint_ratio: new_requirements.max_complaint_ratio,
    }))
}

/// Create the validator eligibility API router
pub fn create_validator_router(state: ValidatorApiState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route(
            "/requirements",
            get(get_requirements).put(update_requirements),
        )
        .with_state(state)
}
