//! GoSellr Trust Engine
//!
//! Decision service for the GoSellr marketplace: converts behavioral and
//! staking history into trust-tier recommendations, validator-eligibility
//! verdicts, and SQL-level upgrade checks. The engines are pure, stateless
//! functions over immutable snapshots; the HTTP layer is a thin shell that
//! supplies inputs and returns verdicts.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs       - Crate root with re-exports
//! ├── main.rs      - Server entrypoint
//! ├── config.rs    - Configuration management
//! ├── policy.rs    - Shared policy types (SQL levels, franchise roles)
//! ├── scoring/     - Trust scoring engine
//! │   ├── score.rs  - Metrics, verdict, tier thresholds
//! │   ├── rules.rs  - Ordered additive rule set
//! │   └── scorer.rs - Rule walk + thresholding
//! ├── validator/   - Validator eligibility engine
//! │   ├── gates.rs     - Hard gates & requirements
//! │   └── evaluator.rs - Gate walk + verdict assembly
//! ├── upgrade.rs   - SQL level upgrade eligibility
//! └── api/         - HTTP API endpoints
//!     ├── trust.rs     - Trust scoring + threshold governance
//!     ├── validator.rs - Eligibility + requirement governance
//!     └── upgrade.rs   - Upgrade checks
//! ```

pub mod api;
pub mod config;
pub mod policy;
pub mod scoring;
pub mod upgrade;
pub mod validator;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use policy::{FranchiseRole, SqlLevel};

// Re-export trust scoring types
pub use scoring::{
    ComplaintTier, TierThresholds, TrustLevel, TrustMetrics, TrustRule, TrustScorer, TrustVerdict,
    RULE_ORDER,
};

// Re-export validator eligibility types
pub use validator::{
    EligibilityGate, ValidatorEvaluator, ValidatorMetrics, ValidatorRequirements, ValidatorVerdict,
    GATE_ORDER,
};

// Re-export upgrade types
pub use upgrade::{
    check_upgrade, profile_score, requirement_for, LevelRequirement, UpgradeProfile,
    UpgradeVerdict,
};

// Re-export API types
pub use api::{
    create_trust_router, create_upgrade_router, create_validator_router, TrustApiState,
    ValidatorApiState,
};
