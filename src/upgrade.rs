//! SQL Level Upgrade Eligibility
//!
//! Scores an upgrade applicant's profile and checks it against the
//! per-target-level requirements ladder. Same contract as the other engines:
//! pure, stateless, a verdict for every input.

use crate::policy::SqlLevel;
use serde::{Deserialize, Serialize};

/// Upgrade applicant snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeProfile {
    pub current_level: SqlLevel,

    /// Skill assessments passed
    pub passed_skill_tests: u32,

    /// Coins locked in staking
    pub locked_coins: f64,
}

/// Requirements to reach a given target level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRequirement {
    pub min_score: i32,
    pub min_coins: f64,
}

/// Requirements ladder. `Free` is the floor; nothing upgrades into it.
pub fn requirement_for(target: SqlLevel) -> Option<LevelRequirement> {
    match target {
        SqlLevel::Free => None,
        SqlLevel::Basic => Some(LevelRequirement {
            min_score: 50,
            min_coins: 100.0,
        }),
        SqlLevel::Normal => Some(LevelRequirement {
            min_score: 150,
            min_coins: 500.0,
        }),
        SqlLevel::High => Some(LevelRequirement {
            min_score: 300,
            min_coins: 1_500.0,
        }),
        SqlLevel::Vip => Some(LevelRequirement {
            min_score: 500,
            min_coins: 5_000.0,
        }),
    }
}

/// Profile score: a flat base, a fixed credit per passed skill test, and a
/// capped coin-lock credit, clamped to 0..=500.
pub fn profile_score(profile: &UpgradeProfile) -> i32 {
    let mut score = 25.0;
    score += 20.0 * profile.passed_skill_tests as f64;
    score += (profile.locked_coins / 100.0).min(15.0);
    (score.round() as i32).clamp(0, 500)
}

/// Outcome of an upgrade check. `missing_requirements` is empty exactly when
/// `eligible` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeVerdict {
    pub eligible: bool,

    /// The applicant's computed profile score
    pub ai_score: i32,

    /// Unmet requirements, shortfall first
    pub missing_requirements: Vec<String>,
}

/// Check whether the profile qualifies for an upgrade to `target`.
pub fn check_upgrade(profile: &UpgradeProfile, target: SqlLevel) -> UpgradeVerdict {
    let ai_score = profile_score(profile);

    let requirement = if target > profile.current_level {
        requirement_for(target)
    } else {
        None
    };

    let Some(requirement) = requirement else {
        return UpgradeVerdict {
            eligible: false,
            ai_score,
            missing_requirements: vec!["Target level must be above the current level".to_string()],
        };
    };

    let mut missing_requirements = Vec::new();

    if ai_score < requirement.min_score {
        missing_requirements.push(format!("AI Score: {}/{}", ai_score, requirement.min_score));
    }

    if profile.locked_coins < requirement.min_coins {
        missing_requirements.push(format!(
            "Coin Lock: {}/{} EHBGC",
            profile.locked_coins, requirement.min_coins
        ));
    }

    UpgradeVerdict {
        eligible: missing_requirements.is_empty(),
        ai_score,
        missing_requirements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_score_components() {
        // Base only
        assert_eq!(
            profile_score(&UpgradeProfile {
                current_level: SqlLevel::Free,
                passed_skill_tests: 0,
                locked_coins: 0.0,
            }),
            25
        );
        // Two tests plus a capped-out coin credit
        assert_eq!(
            profile_score(&UpgradeProfile {
                current_level: SqlLevel::Free,
                passed_skill_tests: 2,
                locked_coins: 10_000.0,
            }),
            25 + 40 + 15
        );
        // Coin credit below the cap
        assert_eq!(
            profile_score(&UpgradeProfile {
                current_level: SqlLevel::Free,
                passed_skill_tests: 2,
                locked_coins: 1_000.0,
            }),
            25 + 40 + 10
        );
    }

    #[test]
    fn test_score_clamps_at_500() {
        let profile = UpgradeProfile {
            current_level: SqlLevel::High,
            passed_skill_tests: 100,
            locked_coins: 100_000.0,
        };
        assert_eq!(profile_score(&profile), 500);
    }

    #[test]
    fn test_basic_upgrade_path() {
        let profile = UpgradeProfile {
            current_level: SqlLevel::Free,
            passed_skill_tests: 2,
            locked_coins: 1_000.0,
        };
        // Score 75 clears Basic (50/100) but not Normal (150/500).
        let verdict = check_upgrade(&profile, SqlLevel::Basic);
        assert!(verdict.eligible);
        assert_eq!(verdict.ai_score, 75);
        assert!(verdict.missing_requirements.is_empty());

        let verdict = check_upgrade(&profile, SqlLevel::Normal);
        assert!(!verdict.eligible);
        assert_eq!(verdict.missing_requirements, vec!["AI Score: 75/150"]);
    }

    #[test]
    fn test_coin_shortfall_message() {
        let profile = UpgradeProfile {
            current_level: SqlLevel::Normal,
            passed_skill_tests: 20,
            locked_coins: 1_000.0,
        };
        let verdict = check_upgrade(&profile, SqlLevel::High);
        assert!(!verdict.eligible);
        assert_eq!(
            verdict.missing_requirements,
            vec!["Coin Lock: 1000/1500 EHBGC"]
        );
    }

    #[test]
    fn test_target_must_exceed_current() {
        let profile = UpgradeProfile {
            current_level: SqlLevel::High,
            passed_skill_tests: 30,
            locked_coins: 50_000.0,
        };
        for target in [SqlLevel::Free, SqlLevel::Basic, SqlLevel::High] {
            let verdict = check_upgrade(&profile, target);
            assert!(!verdict.eligible);
            assert_eq!(
                verdict.missing_requirements,
                vec!["Target level must be above the current level"]
            );
        }
    }
}
