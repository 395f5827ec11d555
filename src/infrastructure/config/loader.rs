use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid hard_cap: {0}. Must be at least 1")]
    InvalidHardCap(usize),

    #[error("Invalid confidence threshold {name}: {value}. Must be within [0, 1]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error(
        "Invalid tier thresholds: depth floor ({depth}) must not exceed closing floor ({closing})"
    )]
    TierOrder { depth: f64, closing: f64 },

    #[error(
        "Invalid exit thresholds: soft exit ({soft}) must not exceed early exit ({early})"
    )]
    ExitOrder { soft: f64, early: f64 },

    #[error("Invalid confidence weights: {0}. progress + variance + intent must sum to 1")]
    WeightsSum(f64),

    #[error("Invalid progress_saturation: {0}. Must be at least 1")]
    InvalidProgressSaturation(usize),

    #[error("Invalid critical_margin: {0}. Must be within [0, 50]")]
    InvalidCriticalMargin(f64),

    #[error("Session path cannot be empty")]
    EmptySessionPath,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .compass/config.yaml (project config, created by init)
    /// 3. .compass/local.yaml (project local overrides, optional)
    /// 4. Environment variables (COMPASS_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".compass/config.yaml"))
            .merge(Yaml::file(".compass/local.yaml"))
            .merge(Env::prefixed("COMPASS_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let seq = &config.sequencer;

        if seq.hard_cap == 0 {
            return Err(ConfigError::InvalidHardCap(seq.hard_cap));
        }

        for (name, value) in [
            ("early_exit_confidence", seq.early_exit_confidence),
            ("soft_exit_confidence", seq.soft_exit_confidence),
            ("depth_tier_floor", seq.depth_tier_floor),
            ("closing_tier_floor", seq.closing_tier_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }

        if seq.depth_tier_floor > seq.closing_tier_floor {
            return Err(ConfigError::TierOrder {
                depth: seq.depth_tier_floor,
                closing: seq.closing_tier_floor,
            });
        }

        if seq.soft_exit_confidence > seq.early_exit_confidence {
            return Err(ConfigError::ExitOrder {
                soft: seq.soft_exit_confidence,
                early: seq.early_exit_confidence,
            });
        }

        if !(0.0..=50.0).contains(&seq.critical_margin) {
            return Err(ConfigError::InvalidCriticalMargin(seq.critical_margin));
        }

        let conf = &config.confidence;
        if conf.progress_saturation == 0 {
            return Err(ConfigError::InvalidProgressSaturation(
                conf.progress_saturation,
            ));
        }
        let weight_sum = conf.progress_weight + conf.variance_weight + conf.intent_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightsSum(weight_sum));
        }

        if config.storage.session_path.is_empty() {
            return Err(ConfigError::EmptySessionPath);
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_hard_cap_rejected() {
        let mut config = Config::default();
        config.sequencer.hard_cap = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidHardCap(0))
        ));
    }

    #[test]
    fn test_misordered_tiers_rejected() {
        let mut config = Config::default();
        config.sequencer.depth_tier_floor = 0.8;
        config.sequencer.closing_tier_floor = 0.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::TierOrder { .. })
        ));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = Config::default();
        config.confidence.variance_weight = 0.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::WeightsSum(_))
        ));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "sequencer:\n  hard_cap: 10\nconfidence:\n  model: progress_linear\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.sequencer.hard_cap, 10);
        assert_eq!(
            config.confidence.model,
            crate::domain::models::ConfidenceModelKind::ProgressLinear
        );
        // Untouched sections keep their defaults.
        assert!((config.sequencer.early_exit_confidence - 0.80).abs() < 1e-9);
    }
}
