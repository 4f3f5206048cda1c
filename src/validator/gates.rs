//! Validator Eligibility Gates
//!
//! Each gate is an independent hard requirement: passing adds a fixed
//! confidence credit, failing flips the overall verdict to ineligible and
//! records an unmet-criteria message. Gates never short-circuit each other,
//! so an applicant learns every unmet requirement in one pass.

use crate::policy::SqlLevel;
use serde::{Deserialize, Serialize};

use super::evaluator::ValidatorMetrics;

/// Governance-configurable gate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRequirements {
    /// Minimum coins locked in staking
    pub min_locked_coins: f64,

    /// Minimum liquid wallet balance
    pub min_wallet_balance: f64,

    /// Lowest SQL level admitted to validation
    pub min_sql_level: SqlLevel,

    /// Complaint ratio must stay strictly below this fraction
    pub max_complaint_ratio: f64,
}

impl Default for ValidatorRequirements {
    fn default() -> Self {
        Self {
            min_locked_coins: 10_000.0,
            min_wallet_balance: 1_000.0,
            min_sql_level: SqlLevel::High,
            max_complaint_ratio: 0.02,
        }
    }
}

/// The fixed gate set, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityGate {
    /// Locked balance meets the staking floor
    MinimumStake,

    /// Liquid balance meets the wallet floor
    WalletFloor,

    /// SQL level at or above the admission tier
    TrustTier,

    /// Complaint ratio strictly below the ceiling
    ComplaintRatio,
}

/// Gate evaluation order. Unmet-criteria messages follow this sequence.
pub const GATE_ORDER: [EligibilityGate; 4] = [
    EligibilityGate::MinimumStake,
    EligibilityGate::WalletFloor,
    EligibilityGate::TrustTier,
    EligibilityGate::ComplaintRatio,
];

impl EligibilityGate {
    /// Confidence credit awarded when this gate passes.
    pub fn credit(&self) -> i32 {
        match self {
            EligibilityGate::MinimumStake => 30,
            EligibilityGate::WalletFloor => 20,
            EligibilityGate::TrustTier => 20,
            EligibilityGate::ComplaintRatio => 15,
        }
    }

    /// Check this gate against the applicant's metrics.
    pub fn passes(&self, metrics: &ValidatorMetrics, requirements: &ValidatorRequirements) -> bool {
        match self {
            EligibilityGate::MinimumStake => metrics.locked_coins >= requirements.min_locked_coins,
            EligibilityGate::WalletFloor => {
                metrics.wallet_balance >= requirements.min_wallet_balance
            }
            EligibilityGate::TrustTier => metrics.sql_level >= requirements.min_sql_level,
            EligibilityGate::ComplaintRatio => {
                metrics.complaint_ratio() < requirements.max_complaint_ratio
            }
        }
    }

    /// Message recorded when this gate fails.
    pub fn unmet_message(&self, requirements: &ValidatorRequirements) -> String {
        match self {
            EligibilityGate::MinimumStake => format!(
                "Must lock at least {} coins",
                format_amount(requirements.min_locked_coins)
            ),
            EligibilityGate::WalletFloor => format!(
                "Wallet balance must be ≥ {}",
                format_amount(requirements.min_wallet_balance)
            ),
            EligibilityGate::TrustTier => format!(
                "SQL level must be {}",
                admitted_levels(requirements.min_sql_level)
            ),
            EligibilityGate::ComplaintRatio => format!(
                "Complaint ratio must be <{}%",
                format_percent(requirements.max_complaint_ratio)
            ),
        }
    }
}

/// Comma-grouped amount, fraction kept only when non-integral.
fn format_amount(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    let fraction = amount.fract().abs();
    if fraction > 0.0 {
        // Display the fraction at input precision, dropping the leading "0".
        let tail = format!("{}", fraction);
        grouped.push_str(tail.trim_start_matches('0'));
    }
    grouped
}

/// Ratio rendered as a percentage, rounded to two decimals so binary float
/// noise never leaks into the message (0.02 renders as "2", not
/// "2.0000000000000004").
fn format_percent(ratio: f64) -> String {
    let pct = (ratio * 10_000.0).round() / 100.0;
    format!("{}", pct)
}

/// The admitted levels, lowest first, joined for display ("High or VIP").
fn admitted_levels(min: SqlLevel) -> String {
    let names: Vec<&str> = SqlLevel::ALL
        .iter()
        .filter(|level| **level >= min)
        .map(|level| level.as_str())
        .collect();
    names.join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_credits() {
        assert_eq!(EligibilityGate::MinimumStake.credit(), 30);
        assert_eq!(EligibilityGate::WalletFloor.credit(), 20);
        assert_eq!(EligibilityGate::TrustTier.credit(), 20);
        assert_eq!(EligibilityGate::ComplaintRatio.credit(), 15);
    }

    #[test]
    fn test_default_messages() {
        let requirements = ValidatorRequirements::default();
        assert_eq!(
            EligibilityGate::MinimumStake.unmet_message(&requirements),
            "Must lock at least 10,000 coins"
        );
        assert_eq!(
            EligibilityGate::WalletFloor.unmet_message(&requirements),
            "Wallet balance must be ≥ 1,000"
        );
        assert_eq!(
            EligibilityGate::TrustTier.unmet_message(&requirements),
            "SQL level must be High or VIP"
        );
        assert_eq!(
            EligibilityGate::ComplaintRatio.unmet_message(&requirements),
            "Complaint ratio must be <2%"
        );
    }

    #[test]
    fn test_amount_grouping() {
        assert_eq!(format_amount(10_000.0), "10,000");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(2_500.5), "2,500.5");
    }

    #[test]
    fn test_percent_rendering() {
        assert_eq!(format_percent(0.02), "2");
        assert_eq!(format_percent(0.015), "1.5");
        assert_eq!(format_percent(0.1), "10");
    }

    #[test]
    fn test_admitted_levels_follow_min() {
        assert_eq!(admitted_levels(SqlLevel::High), "High or VIP");
        assert_eq!(admitted_levels(SqlLevel::Vip), "VIP");
        assert_eq!(
            admitted_levels(SqlLevel::Normal),
            "Normal or High or VIP"
        );
    }
}
