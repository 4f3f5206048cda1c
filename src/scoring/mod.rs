//! Trust Scoring Engine
//!
//! Converts a seller's behavioral history into a recommended trust tier with
//! a machine-readable reason trail.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌────────────────┐
//! │ TrustMetrics │────►│ TrustScorer │────►│ TrustVerdict   │
//! │ (snapshot)   │     │ (rule walk) │     │ (score + tier) │
//! └──────────────┘     └─────────────┘     └────────────────┘
//!                             │
//!                             ▼
//!                      ┌─────────────┐
//!                      │ RULE_ORDER  │
//!                      │ (fixed rule │
//!                      │  sequence)  │
//!                      └─────────────┘
//! ```
//!
//! ## Score Model
//!
//! - Score starts at 0; each applicable rule adds or subtracts a fixed delta
//! - All applicable rules fire, no short-circuiting between rules
//! - The complaint record resolves to exactly one of three disjoint tiers
//! - Thresholds map the final score onto `Hold` / `Review` / `Normal`

mod rules;
mod score;
mod scorer;

pub use rules::{ComplaintTier, RuleHit, TrustRule, RULE_ORDER};
pub use score::{TierThresholds, TrustLevel, TrustMetrics, TrustVerdict};
pub use scorer::TrustScorer;
