use serde::{Deserialize, Serialize};

/// Main configuration structure for Compass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Sequencer thresholds and resolver selection
    #[serde(default)]
    pub sequencer: SequencerConfig,

    /// Confidence model configuration
    #[serde(default)]
    pub confidence: ConfidenceConfig,

    /// Session storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which next-question strategy the sequencer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    /// Hand-coded tier cascade (default).
    Tiered,
    /// Node branch rules evaluated as data, tier cascade as fallback.
    Declarative,
}

impl Default for ResolverKind {
    fn default() -> Self {
        Self::Tiered
    }
}

/// Sequencer thresholds.
///
/// These are designer-calibrated constants; the defaults reproduce the
/// reference termination behavior exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SequencerConfig {
    /// Absolute maximum answers per session
    #[serde(default = "default_hard_cap")]
    pub hard_cap: usize,

    /// Confidence above which a fully-captured session terminates early
    #[serde(default = "default_early_exit_confidence")]
    pub early_exit_confidence: f64,

    /// Confidence above which a low-urgency session terminates
    #[serde(default = "default_soft_exit_confidence")]
    pub soft_exit_confidence: f64,

    /// Urgency below this pairs with the soft exit
    #[serde(default = "default_low_urgency_below")]
    pub low_urgency_below: f64,

    /// Confidence floor of the depth tier
    #[serde(default = "default_depth_tier_floor")]
    pub depth_tier_floor: f64,

    /// Confidence floor of the closing tier
    #[serde(default = "default_closing_tier_floor")]
    pub closing_tier_floor: f64,

    /// Minimum deviation from neutral for a critical signal to count as captured
    #[serde(default = "default_critical_margin")]
    pub critical_margin: f64,

    /// Technical debt above this unlocks the tech-debt module regardless of intent
    #[serde(default = "default_elevated_tech_debt")]
    pub elevated_tech_debt: f64,

    /// Business maturity above this unlocks the revenue-bottleneck module
    #[serde(default = "default_high_maturity")]
    pub high_maturity: f64,

    /// Next-question resolver strategy
    #[serde(default)]
    pub resolver: ResolverKind,
}

const fn default_hard_cap() -> usize {
    12
}

const fn default_early_exit_confidence() -> f64 {
    0.80
}

const fn default_soft_exit_confidence() -> f64 {
    0.70
}

const fn default_low_urgency_below() -> f64 {
    30.0
}

const fn default_depth_tier_floor() -> f64 {
    0.45
}

const fn default_closing_tier_floor() -> f64 {
    0.65
}

const fn default_critical_margin() -> f64 {
    10.0
}

const fn default_elevated_tech_debt() -> f64 {
    60.0
}

const fn default_high_maturity() -> f64 {
    65.0
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            hard_cap: default_hard_cap(),
            early_exit_confidence: default_early_exit_confidence(),
            soft_exit_confidence: default_soft_exit_confidence(),
            low_urgency_below: default_low_urgency_below(),
            depth_tier_floor: default_depth_tier_floor(),
            closing_tier_floor: default_closing_tier_floor(),
            critical_margin: default_critical_margin(),
            elevated_tech_debt: default_elevated_tech_debt(),
            high_maturity: default_high_maturity(),
            resolver: ResolverKind::default(),
        }
    }
}

/// Which confidence formula is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceModelKind {
    /// Weighted blend of progress, signal variance and intent clarity (default).
    Weighted,
    /// Baseline plus linear progress only.
    ProgressLinear,
}

impl Default for ConfidenceModelKind {
    fn default() -> Self {
        Self::Weighted
    }
}

/// Confidence model configuration.
///
/// The weights are a design choice, not derived; they must sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfidenceConfig {
    /// Formula selection
    #[serde(default)]
    pub model: ConfidenceModelKind,

    /// Answer count at which the progress term saturates
    #[serde(default = "default_progress_saturation")]
    pub progress_saturation: usize,

    /// Weight of the progress term (weighted model)
    #[serde(default = "default_progress_weight")]
    pub progress_weight: f64,

    /// Weight of the signal-variance term (weighted model)
    #[serde(default = "default_variance_weight")]
    pub variance_weight: f64,

    /// Weight of the intent-clarity term (weighted model)
    #[serde(default = "default_intent_weight")]
    pub intent_weight: f64,
}

const fn default_progress_saturation() -> usize {
    12
}

const fn default_progress_weight() -> f64 {
    0.35
}

const fn default_variance_weight() -> f64 {
    0.30
}

const fn default_intent_weight() -> f64 {
    0.35
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            model: ConfidenceModelKind::default(),
            progress_saturation: default_progress_saturation(),
            progress_weight: default_progress_weight(),
            variance_weight: default_variance_weight(),
            intent_weight: default_intent_weight(),
        }
    }
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Path to the serialized session record
    #[serde(default = "default_session_path")]
    pub session_path: String,
}

fn default_session_path() -> String {
    ".compass/session.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
