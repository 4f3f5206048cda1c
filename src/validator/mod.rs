//! Validator Eligibility Engine
//!
//! Decides whether a user may take the validator role: every hard gate must
//! pass, and the accumulated confidence score plus the unmet-criteria trail
//! explain the verdict either way.

mod evaluator;
mod gates;

pub use evaluator::{ValidatorEvaluator, ValidatorMetrics, ValidatorVerdict};
pub use gates::{EligibilityGate, ValidatorRequirements, GATE_ORDER};
