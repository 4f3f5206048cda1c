//! Validator Eligibility Evaluator
//!
//! Runs every gate against a staking/account snapshot, accumulates the
//! confidence score, and produces a verdict with the full unmet-criteria
//! trail. A single failed gate makes the applicant ineligible regardless of
//! how high the score lands.

use crate::policy::{FranchiseRole, SqlLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gates::{ValidatorRequirements, GATE_ORDER};

/// Flat credit for account activity. No activity signal is wired up yet, so
/// every applicant receives it.
// TODO: replace with a real recency check once order timestamps reach the
// metrics snapshot.
const BASELINE_ACTIVITY_CREDIT: i32 = 7;

/// Bonus for Master Franchise / Corporate applicants. Bonus only: a missing
/// or lower role never causes ineligibility.
const FRANCHISE_BONUS: i32 = 8;

/// Staking and account snapshot for a single eligibility evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatorMetrics {
    /// Liquid wallet balance
    pub wallet_balance: f64,

    /// Coins locked in staking
    pub locked_coins: f64,

    /// Current SQL level
    pub sql_level: SqlLevel,

    /// Lifetime completed-order count
    pub total_orders: u32,

    /// Lifetime complaint count
    pub complaints: u32,

    /// Organizational role, if any
    #[serde(default)]
    pub franchise_role: Option<FranchiseRole>,
}

impl ValidatorMetrics {
    /// Complaints per completed order. An applicant with no order history is
    /// fully penalized (ratio 1.0); the guard avoids a division fault and
    /// must never turn into an error path.
    pub fn complaint_ratio(&self) -> f64 {
        if self.total_orders > 0 {
            self.complaints as f64 / self.total_orders as f64
        } else {
            1.0
        }
    }
}

/// Outcome of an eligibility evaluation. `unmet_criteria` is empty exactly
/// when `eligible` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorVerdict {
    pub eligible: bool,

    /// Accumulated confidence score
    pub score: i32,

    /// Failed-gate messages, in gate order
    pub unmet_criteria: Vec<String>,

    /// Human-readable outcome
    pub narrative: String,
}

/// Stateless eligibility evaluator over the configured requirements.
#[derive(Debug, Clone, Default)]
pub struct ValidatorEvaluator {
    requirements: ValidatorRequirements,
}

impl ValidatorEvaluator {
    pub fn new(requirements: ValidatorRequirements) -> Self {
        Self { requirements }
    }

    /// Map a staking/account snapshot onto an eligibility verdict.
    pub fn evaluate(&self, metrics: &ValidatorMetrics) -> ValidatorVerdict {
        let mut eligible = true;
        let mut score = 0i32;
        let mut unmet_criteria = Vec::new();

        for gate in GATE_ORDER {
            if gate.passes(metrics, &self.requirements) {
                score += gate.credit();
            } else {
                eligible = false;
                unmet_criteria.push(gate.unmet_message(&self.requirements));
            }
        }

        score += BASELINE_ACTIVITY_CREDIT;

        if metrics
            .franchise_role
            .is_some_and(|role| role.grants_bonus())
        {
            score += FRANCHISE_BONUS;
        }

        let narrative = if eligible {
            let noun = if metrics.complaints == 1 {
                "complaint"
            } else {
                "complaints"
            };
            format!(
                "Excellent performance with only {} {} in {} orders",
                metrics.complaints, noun, metrics.total_orders
            )
        } else {
            unmet_criteria.join("; ")
        };

        debug!(
            eligible,
            score,
            unmet = unmet_criteria.len(),
            "validator evaluation complete"
        );

        ValidatorVerdict {
            eligible,
            score,
            unmet_criteria,
            narrative,
        }
    }

    pub fn requirements(&self) -> &ValidatorRequirements {
        &self.requirements
    }

    /// Replace requirements (governance action).
    pub fn set_requirements(&mut self, requirements: ValidatorRequirements) {
        self.requirements = requirements;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_applicant() -> ValidatorMetrics {
        ValidatorMetrics {
            wallet_balance: 1_000.0,
            locked_coins: 10_000.0,
            sql_level: SqlLevel::Vip,
            total_orders: 100,
            complaints: 1,
            franchise_role: Some(FranchiseRole::Corporate),
        }
    }

    #[test]
    fn test_fully_qualified_applicant() {
        let evaluator = ValidatorEvaluator::default();
        let verdict = evaluator.evaluate(&strong_applicant());

        assert!(verdict.eligible);
        assert_eq!(verdict.score, 30 + 20 + 20 + 15 + 7 + 8);
        assert!(verdict.unmet_criteria.is_empty());
        assert_eq!(
            verdict.narrative,
            "Excellent performance with only 1 complaint in 100 orders"
        );
    }

    #[test]
    fn test_no_history_fails_every_gate() {
        let evaluator = ValidatorEvaluator::default();
        let verdict = evaluator.evaluate(&ValidatorMetrics {
            wallet_balance: 0.0,
            locked_coins: 0.0,
            sql_level: SqlLevel::Free,
            total_orders: 0,
            complaints: 0,
            franchise_role: None,
        });

        assert!(!verdict.eligible);
        // Only the baseline activity credit survives.
        assert_eq!(verdict.score, 7);
        assert_eq!(
            verdict.unmet_criteria,
            vec![
                "Must lock at least 10,000 coins",
                "Wallet balance must be ≥ 1,000",
                "SQL level must be High or VIP",
                "Complaint ratio must be <2%",
            ]
        );
        assert_eq!(
            verdict.narrative,
            "Must lock at least 10,000 coins; Wallet balance must be ≥ 1,000; \
             SQL level must be High or VIP; Complaint ratio must be <2%"
        );
    }

    #[test]
    fn test_single_failed_gate_blocks_eligibility() {
        let evaluator = ValidatorEvaluator::default();
        let mut metrics = strong_applicant();
        metrics.locked_coins = 9_999.0;

        let verdict = evaluator.evaluate(&metrics);
        assert!(!verdict.eligible);
        assert_eq!(verdict.unmet_criteria.len(), 1);
        // The other gates still credit the score.
        assert_eq!(verdict.score, 20 + 20 + 15 + 7 + 8);
    }

    #[test]
    fn test_zero_orders_defaults_ratio_to_one() {
        let metrics = ValidatorMetrics {
            wallet_balance: 5_000.0,
            locked_coins: 20_000.0,
            sql_level: SqlLevel::Vip,
            total_orders: 0,
            complaints: 0,
            franchise_role: None,
        };
        assert_eq!(metrics.complaint_ratio(), 1.0);

        let verdict = ValidatorEvaluator::default().evaluate(&metrics);
        assert!(!verdict.eligible);
        assert_eq!(verdict.unmet_criteria, vec!["Complaint ratio must be <2%"]);
    }

    #[test]
    fn test_franchise_bonus_is_bonus_only() {
        let evaluator = ValidatorEvaluator::default();
        let mut with_role = strong_applicant();
        with_role.franchise_role = Some(FranchiseRole::SubFranchise);

        // A non-qualifying role drops the bonus but never the eligibility.
        let verdict = evaluator.evaluate(&with_role);
        assert!(verdict.eligible);
        assert_eq!(verdict.score, 30 + 20 + 20 + 15 + 7);
    }

    #[test]
    fn test_pluralized_narrative() {
        let evaluator = ValidatorEvaluator::default();
        let mut metrics = strong_applicant();
        metrics.complaints = 0;
        assert_eq!(
            evaluator.evaluate(&metrics).narrative,
            "Excellent performance with only 0 complaints in 100 orders"
        );
    }
}
