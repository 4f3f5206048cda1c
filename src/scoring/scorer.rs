//! Trust Scorer
//!
//! Walks the ordered rule set, accumulates the score, and thresholds it into
//! a tier recommendation. Pure and total: any numeric input yields a verdict,
//! identical inputs yield identical verdicts.

use super::rules::RULE_ORDER;
use super::score::{TierThresholds, TrustMetrics, TrustVerdict};
use tracing::debug;

/// Stateless trust scorer. Holds only the governance thresholds; every
/// evaluation allocates its own accumulators, so concurrent calls never
/// interact.
#[derive(Debug, Clone, Default)]
pub struct TrustScorer {
    thresholds: TierThresholds,
}

impl TrustScorer {
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    /// Map a behavioral snapshot onto a trust verdict.
    pub fn evaluate(&self, metrics: &TrustMetrics) -> TrustVerdict {
        let mut score = 0i32;
        let mut reason_codes = Vec::new();

        for rule in RULE_ORDER {
            if let Some(hit) = rule.apply(metrics) {
                score += hit.delta;
                reason_codes.push(hit.reason.to_string());
            }
        }

        let suggested_level = self.thresholds.level_for(score);

        debug!(
            score,
            level = ?suggested_level,
            rules_fired = reason_codes.len(),
            "trust evaluation complete"
        );

        TrustVerdict {
            score,
            suggested_level,
            reason_codes,
            summary: metrics.summary(),
        }
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Replace thresholds (governance action).
    pub fn set_thresholds(&mut self, thresholds: TierThresholds) {
        self.thresholds = thresholds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TrustLevel;

    #[test]
    fn test_strong_history_lands_on_review() {
        let scorer = TrustScorer::default();
        let verdict = scorer.evaluate(&TrustMetrics::new(45, 4.7, 35, 0));

        assert_eq!(verdict.score, 60);
        assert_eq!(verdict.suggested_level, TrustLevel::Review);
        assert_eq!(
            verdict.reason_codes,
            vec![
                "active_over_30_days",
                "rating_at_least_4.5",
                "orders_at_least_30",
                "zero_complaints",
            ]
        );
    }

    #[test]
    fn test_poor_history_goes_negative_and_holds() {
        let scorer = TrustScorer::default();
        let verdict = scorer.evaluate(&TrustMetrics::new(10, 3.5, 5, 5));

        assert_eq!(verdict.score, -35);
        assert_eq!(verdict.suggested_level, TrustLevel::Hold);
        assert_eq!(
            verdict.reason_codes,
            vec!["more_than_2_complaints", "rating_below_4.0"]
        );
    }

    #[test]
    fn test_full_credit_ceiling() {
        let scorer = TrustScorer::default();
        // The rule set tops out at 10 + 15 + 20 + 15 = 60.
        let verdict = scorer.evaluate(&TrustMetrics::new(400, 4.9, 500, 0));
        assert_eq!(verdict.score, 60);
        assert_eq!(verdict.suggested_level, TrustLevel::Review);

        // Normal stays reachable through a governance threshold override.
        let generous = TrustScorer::new(TierThresholds {
            normal_min: 60,
            review_min: 40,
        });
        let verdict = generous.evaluate(&TrustMetrics::new(400, 4.9, 500, 0));
        assert_eq!(verdict.suggested_level, TrustLevel::Normal);
    }

    #[test]
    fn test_implausible_inputs_still_score() {
        let scorer = TrustScorer::default();
        // More complaints than orders is computed literally, never rejected.
        let verdict = scorer.evaluate(&TrustMetrics::new(0, 0.0, 2, 10));
        assert_eq!(verdict.score, -15 + -20);
        assert_eq!(verdict.suggested_level, TrustLevel::Hold);
    }

    #[test]
    fn test_determinism() {
        let scorer = TrustScorer::default();
        let metrics = TrustMetrics::new(45, 4.7, 35, 0);
        assert_eq!(scorer.evaluate(&metrics), scorer.evaluate(&metrics));
    }
}
