//! HTTP API endpoints for the trust engine
//!
//! Provides REST APIs for:
//! - Trust scoring (evaluation, tier threshold governance)
//! - Validator eligibility (evaluation, gate requirement governance)
//! - SQL level upgrade checks

pub mod trust;
pub mod upgrade;
pub mod validator;

pub use trust::{create_trust_router, TrustApiState};
pub use upgrade::create_upgrade_router;
pub use validator::{create_validator_router, ValidatorApiState};
