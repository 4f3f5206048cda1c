//! Trust Score Types and Tier Thresholds
//!
//! The score is an unbounded accumulator (it can go negative when complaint
//! and rating penalties outweigh the credits). Governance thresholds map the
//! final score onto the recommended tier.

use serde::{Deserialize, Serialize};

/// Behavioral snapshot for a single trust evaluation.
///
/// The engine treats every field as literal: physically implausible
/// combinations (e.g. more complaints than orders) still produce a verdict.
/// Shape validation belongs to the deserialization layer upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustMetrics {
    /// Days since account activation
    pub days_active: u32,

    /// Average user rating, 0.0–5.0
    pub rating: f64,

    /// Lifetime completed-order count
    pub total_orders: u32,

    /// Lifetime complaint count
    pub complaints: u32,
}

impl TrustMetrics {
    pub fn new(days_active: u32, rating: f64, total_orders: u32, complaints: u32) -> Self {
        Self {
            days_active,
            rating,
            total_orders,
            complaints,
        }
    }

    /// Human-readable one-line justification for the verdict.
    pub fn summary(&self) -> String {
        format!(
            "User completed {} orders with {} rating and {} complaint(s)",
            self.total_orders, self.rating, self.complaints
        )
    }
}

/// Recommended trust tier, most restrictive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrustLevel {
    /// Account held back from normal operation
    Hold,
    /// Manual review recommended
    Review,
    /// Full normal standing
    Normal,
}

/// Governance-configurable score-to-tier thresholds.
///
/// Evaluated high-to-low: `normal_min` wins over `review_min`, anything
/// below `review_min` lands on `Hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Minimum score for the `Normal` tier
    pub normal_min: i32,

    /// Minimum score for the `Review` tier
    pub review_min: i32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            normal_min: 80,
            review_min: 60,
        }
    }
}

impl TierThresholds {
    pub fn level_for(&self, score: i32) -> TrustLevel {
        if score >= self.normal_min {
            TrustLevel::Normal
        } else if score >= self.review_min {
            TrustLevel::Review
        } else {
            TrustLevel::Hold
        }
    }
}

/// Outcome of a trust evaluation. Created fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustVerdict {
    /// Accumulated score across all fired rules (can be negative)
    pub score: i32,

    /// Recommended tier after thresholding
    pub suggested_level: TrustLevel,

    /// Labels of the rules that fired, in evaluation order
    pub reason_codes: Vec<String>,

    /// Human-readable justification
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_partition() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.level_for(80), TrustLevel::Normal);
        assert_eq!(thresholds.level_for(95), TrustLevel::Normal);
        assert_eq!(thresholds.level_for(79), TrustLevel::Review);
        assert_eq!(thresholds.level_for(60), TrustLevel::Review);
        assert_eq!(thresholds.level_for(59), TrustLevel::Hold);
        assert_eq!(thresholds.level_for(-35), TrustLevel::Hold);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(TrustLevel::Hold < TrustLevel::Review);
        assert!(TrustLevel::Review < TrustLevel::Normal);
    }

    #[test]
    fn test_summary_uses_input_precision() {
        let metrics = TrustMetrics::new(45, 4.7, 35, 0);
        assert_eq!(
            metrics.summary(),
            "User completed 35 orders with 4.7 rating and 0 complaint(s)"
        );
    }
}
