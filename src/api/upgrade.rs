//! SQL Level Upgrade API Endpoints

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::policy::SqlLevel;
use crate::upgrade::{check_upgrade, UpgradeProfile, UpgradeVerdict};

#[derive(Debug, Deserialize)]
pub struct UpgradeCheckRequest {
    pub current_level: SqlLevel,
    pub passed_skill_tests: u32,
    pub locked_coins: f64,
    pub target_level: SqlLevel,
}

#[derive(Debug, Serialize)]
pub struct UpgradeCheckResponse {
    pub verdict: UpgradeVerdict,
    pub evaluated_at: String,
}

/// POST /sql/upgrade/check - Check upgrade eligibility for a target level
pub async fn check(Json(payload): Json<UpgradeCheckRequest>) -> Json<UpgradeCheckResponse> {
    let profile = UpgradeProfile {
        current_level: payload.current_level,
        passed_skill_tests: payload.passed_skill_tests,
        locked_coins: payload.locked_coins,
    };

    Json(UpgradeCheckResponse {
        verdict: check_upgrade(&profile, payload.target_level),
        evaluated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Create the upgrade API router
pub fn create_upgrade_router() -> Router {
    Router::new().route("/check", post(check))
}
