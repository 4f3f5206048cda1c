//! Shared marketplace policy types
//!
//! The SQL level ladder and the franchise role set are referenced by every
//! decision surface in the engine, so they live here rather than in any one
//! scorer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service Quality Level, the platform-wide trust ladder for a verified user.
///
/// The derived ordering follows declaration order: `Free` is the lowest
/// standing, `VIP` the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SqlLevel {
    Free,
    Basic,
    Normal,
    High,
    #[serde(rename = "VIP")]
    Vip,
}

impl SqlLevel {
    /// All levels, lowest to highest.
    pub const ALL: [SqlLevel; 5] = [
        SqlLevel::Free,
        SqlLevel::Basic,
        SqlLevel::Normal,
        SqlLevel::High,
        SqlLevel::Vip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SqlLevel::Free => "Free",
            SqlLevel::Basic => "Basic",
            SqlLevel::Normal => "Normal",
            SqlLevel::High => "High",
            SqlLevel::Vip => "VIP",
        }
    }

    /// Parse a level name as it appears in configuration (case-insensitive).
    pub fn parse(name: &str) -> Option<SqlLevel> {
        match name.to_lowercase().as_str() {
            "free" => Some(SqlLevel::Free),
            "basic" => Some(SqlLevel::Basic),
            "normal" => Some(SqlLevel::Normal),
            "high" => Some(SqlLevel::High),
            "vip" => Some(SqlLevel::Vip),
            _ => None,
        }
    }
}

impl fmt::Display for SqlLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organizational role within the franchise hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FranchiseRole {
    #[serde(rename = "Sub Franchise")]
    SubFranchise,
    #[serde(rename = "Master Franchise")]
    MasterFranchise,
    #[serde(rename = "Corporate")]
    Corporate,
}

impl FranchiseRole {
    /// Whether this role earns the organizational confidence bonus.
    pub fn grants_bonus(&self) -> bool {
        matches!(
            self,
            FranchiseRole::MasterFranchise | FranchiseRole::Corporate
        )
    }
}
