//! Additive Trust Rules
//!
//! The rule set is an ordered sequence of declarative descriptors, not nested
//! conditionals: each rule carries its predicate, score delta, and reason
//! code, and the scorer walks [`RULE_ORDER`] front to back. Every applicable
//! rule fires; there is no short-circuiting between rules.

use super::score::TrustMetrics;
use serde::{Deserialize, Serialize};

/// A rule that fired: its score delta and the recorded reason label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub delta: i32,
    pub reason: &'static str,
}

/// The fixed trust rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustRule {
    /// Account active for more than 30 days
    ActiveAccount,

    /// Average rating at or above 4.5
    HighRating,

    /// At least 30 completed orders
    EstablishedSeller,

    /// Complaint history, resolved to one of three mutually exclusive tiers
    ComplaintRecord,

    /// Average rating below 4.0
    LowRating,
}

/// Rule evaluation order. Reason codes in a verdict follow this sequence.
pub const RULE_ORDER: [TrustRule; 5] = [
    TrustRule::ActiveAccount,
    TrustRule::HighRating,
    TrustRule::EstablishedSeller,
    TrustRule::ComplaintRecord,
    TrustRule::LowRating,
];

impl TrustRule {
    /// Evaluate this rule against the metrics. `None` means the rule did not
    /// apply and contributes nothing to the verdict.
    pub fn apply(&self, metrics: &TrustMetrics) -> Option<RuleHit> {
        match self {
            TrustRule::ActiveAccount => (metrics.days_active > 30).then_some(RuleHit {
                delta: 10,
                reason: "active_over_30_days",
            }),
            TrustRule::HighRating => (metrics.rating >= 4.5).then_some(RuleHit {
                delta: 15,
                reason: "rating_at_least_4.5",
            }),
            TrustRule::EstablishedSeller => (metrics.total_orders >= 30).then_some(RuleHit {
                delta: 20,
                reason: "orders_at_least_30",
            }),
            TrustRule::ComplaintRecord => {
                Some(ComplaintTier::classify(metrics.complaints).hit())
            }
            TrustRule::LowRating => (metrics.rating < 4.0).then_some(RuleHit {
                delta: -20,
                reason: "rating_below_4.0",
            }),
        }
    }
}

/// Complaint history tiers. Disjoint: exactly one matches per evaluation,
/// decided by an ordered first-match dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintTier {
    /// No complaints on record
    Clean,
    /// One or two complaints
    Minor,
    /// More than two complaints
    Excessive,
}

impl ComplaintTier {
    pub fn classify(complaints: u32) -> ComplaintTier {
        if complaints == 0 {
            ComplaintTier::Clean
        } else if complaints <= 2 {
            ComplaintTier::Minor
        } else {
            ComplaintTier::Excessive
        }
    }

    fn hit(&self) -> RuleHit {
        match self {
            ComplaintTier::Clean => RuleHit {
                delta: 15,
                reason: "zero_complaints",
            },
            ComplaintTier::Minor => RuleHit {
                delta: 10,
                reason: "at_most_2_complaints",
            },
            ComplaintTier::Excessive => RuleHit {
                delta: -15,
                reason: "more_than_2_complaints",
            },
        }
    }
}
