use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::policy::SqlLevel;
use crate::scoring::TierThresholds;
use crate::validator::ValidatorRequirements;

/// Configuration for the trust engine service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Trust scoring configuration
    pub trust: TrustConfig,
    /// Validator eligibility configuration
    pub validator: ValidatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Enable request/response logging
    pub log_requests: bool,
}

/// Governance overrides for the trust tier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Minimum score for the Normal tier
    pub normal_threshold: i32,
    /// Minimum score for the Review tier
    pub review_threshold: i32,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            normal_threshold: 80,
            review_threshold: 60,
        }
    }
}

impl TrustConfig {
    /// Convert to TierThresholds for use by TrustScorer
    pub fn to_thresholds(&self) -> TierThresholds {
        TierThresholds {
            normal_min: self.normal_threshold,
            review_min: self.review_threshold,
        }
    }
}

/// Governance overrides for the validator eligibility gates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Minimum coins locked in staking
    pub min_locked_coins: f64,
    /// Minimum liquid wallet balance
    pub min_wallet_balance: f64,
    /// Lowest SQL level admitted to validation
    pub min_sql_level: SqlLevel,
    /// Complaint ratio must stay strictly below this fraction
    pub max_complaint_ratio: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_locked_coins: 10_000.0,
            min_wallet_balance: 1_000.0,
            min_sql_level: SqlLevel::High,
            max_complaint_ratio: 0.02,
        }
    }
}

impl ValidatorConfig {
    /// Convert to ValidatorRequirements for use by ValidatorEvaluator
    pub fn to_requirements(&self) -> ValidatorRequirements {
        ValidatorRequirements {
            min_locked_coins: self.min_locked_coins,
            min_wallet_balance: self.min_wallet_balance,
            min_sql_level: self.min_sql_level,
            max_complaint_ratio: self.max_complaint_ratio,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8750,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_requests: false,
            },
            trust: TrustConfig::default(),
            validator: ValidatorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables and validate consistency
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("GOSELLR_TRUST_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("GOSELLR_TRUST_PORT") {
            config.server.port = port.parse().context("Invalid GOSELLR_TRUST_PORT value")?;
        }

        // Logging configuration
        if let Ok(level) = env::var("GOSELLR_TRUST_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(log_requests) = env::var("GOSELLR_TRUST_LOG_REQUESTS") {
            config.logging.log_requests = log_requests
                .parse()
                .context("Invalid GOSELLR_TRUST_LOG_REQUESTS value")?;
        }

        // Trust scoring configuration
        if let Ok(threshold) = env::var("GOSELLR_TRUST_NORMAL_THRESHOLD") {
            config.trust.normal_threshold = threshold
                .parse()
                .context("Invalid GOSELLR_TRUST_NORMAL_THRESHOLD value")?;
        }

        if let Ok(threshold) = env::var("GOSELLR_TRUST_REVIEW_THRESHOLD") {
            config.trust.review_threshold = threshold
                .parse()
                .context("Invalid GOSELLR_TRUST_REVIEW_THRESHOLD value")?;
        }

        // Validator eligibility configuration
        if let Ok(coins) = env::var("GOSELLR_VALIDATOR_MIN_LOCKED_COINS") {
            config.validator.min_locked_coins = coins
                .parse()
                .context("Invalid GOSELLR_VALIDATOR_MIN_LOCKED_COINS value")?;
        }

        if let Ok(balance) = env::var("GOSELLR_VALIDATOR_MIN_WALLET_BALANCE") {
            config.validator.min_wallet_balance = balance
                .parse()
                .context("Invalid GOSELLR_VALIDATOR_MIN_WALLET_BALANCE value")?;
        }

        if let Ok(level) = env::var("GOSELLR_VALIDATOR_MIN_SQL_LEVEL") {
            config.validator.min_sql_level = SqlLevel::parse(&level).ok_or_else(|| {
                anyhow::anyhow!("Invalid GOSELLR_VALIDATOR_MIN_SQL_LEVEL value: {}", level)
            })?;
        }

        if let Ok(ratio) = env::var("GOSELLR_VALIDATOR_MAX_COMPLAINT_RATIO") {
            config.validator.max_complaint_ratio = ratio
                .parse()
                .context("Invalid GOSELLR_VALIDATOR_MAX_COMPLAINT_RATIO value")?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration for consistency
    fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(anyhow::anyhow!("Server host cannot be empty"));
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port must be non-zero"));
        }

        if self.trust.review_threshold >= self.trust.normal_threshold {
            return Err(anyhow::anyhow!(
                "Review threshold ({}) must be below normal threshold ({})",
                self.trust.review_threshold,
                self.trust.normal_threshold
            ));
        }

        if self.validator.min_locked_coins < 0.0 {
            return Err(anyhow::anyhow!("Minimum locked coins cannot be negative"));
        }

        if self.validator.min_wallet_balance < 0.0 {
            return Err(anyhow::anyhow!("Minimum wallet balance cannot be negative"));
        }

        if self.validator.max_complaint_ratio <= 0.0 || self.validator.max_complaint_ratio > 1.0 {
            return Err(anyhow::anyhow!(
                "Max complaint ratio must be within (0, 1], got {}",
                self.validator.max_complaint_ratio
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = EngineConfig::default();
        config.trust.review_threshold = 90;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_ratio_rejected() {
        let mut config = EngineConfig::default();
        config.validator.max_complaint_ratio = 0.0;
        assert!(config.validate().is_err());
        config.validator.max_complaint_ratio = 1.5;
        assert!(config.validate().is_err());
        config.validator.max_complaint_ratio = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_convert_to_engine_policy() {
        let config = EngineConfig::default();

        let thresholds = config.trust.to_thresholds();
        assert_eq!(thresholds.normal_min, 80);
        assert_eq!(thresholds.review_min, 60);

        let requirements = config.validator.to_requirements();
        assert_eq!(requirements.min_locked_coins, 10_000.0);
        assert_eq!(requirements.min_sql_level, SqlLevel::High);
    }
}
