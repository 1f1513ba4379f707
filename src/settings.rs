//! Configuration and tunable parameters for the classifiers
//!
//! The punctuation, capitalization and emoticon adjustments are empirically
//! tuned constants. Defaults reproduce the reference behavior exactly; every
//! value can be overridden from a TOML file or from `LEXAFFECT__*`
//! environment variables.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for overrides (`LEXAFFECT__SENTIMENT__EMOTICON_WEIGHT=0.4`)
pub const ENV_PREFIX: &str = "LEXAFFECT";

/// Main classifier settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AffectSettings {
    /// Negation/intensifier/contrast scope settings
    pub scope: ScopeSettings,

    /// ALL-CAPS detection settings (shared by both analyzers)
    pub caps: CapsSettings,

    /// Emotion aggregation and normalization settings
    pub emotion: EmotionSettings,

    /// Sentiment aggregation and normalization settings
    pub sentiment: SentimentSettings,
}

impl AffectSettings {
    /// Load settings from an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<AffectSettings>()?;

        Ok(settings)
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Settings for modifier scope resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSettings {
    /// Maximum token distance behind a hit within which a negation applies
    pub negation_window: usize,

    /// Maximum token distance behind a hit within which an intensifier applies
    pub intensifier_window: usize,

    /// Magnitude kept by a negated sentiment hit after its sign flips
    pub sentiment_negation_factor: f64,

    /// Weight of the clause after a contrast conjunction
    pub contrast_weight: f64,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            negation_window: 3,
            intensifier_window: 2,
            sentiment_negation_factor: 0.8,
            contrast_weight: 1.5,
        }
    }
}

/// ALL-CAPS shouting detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsSettings {
    /// Minimum letters for a word to count as shouted
    pub min_word_len: usize,

    /// Shouting is detected when more than this many words are capitalized
    pub min_count: usize,

    /// ...or when capitalized words exceed this share of all words
    pub min_ratio: f64,
}

impl Default for CapsSettings {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            min_count: 1,
            min_ratio: 0.3,
        }
    }
}

/// Emotion analyzer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionSettings {
    /// Confusion added per question mark
    pub question_confusion: f64,

    /// Surprise added per question mark beyond the first
    pub question_surprise: f64,

    /// Boost per exclamation mark for the strongest emotion
    pub exclamation_boost: f64,

    /// Surprise per exclamation mark when no emotion was detected
    pub exclamation_surprise: f64,

    /// Joy/anger per exclamation mark when no emotion was detected
    pub exclamation_polarity: f64,

    /// Multiplier for the strongest emotion in shouted text
    pub caps_multiplier: f64,

    /// Reduction applied to a negated hit without a remap rule
    pub negation_penalty: f64,

    /// Neutral mass added by a negated hit without a remap rule
    pub negation_neutral_bonus: f64,

    /// Below this total emotion mass, neutral mass is injected
    pub neutral_mass_threshold: f64,

    /// Neutral mass injected for weakly emotional text
    pub neutral_injection: f64,

    /// Probabilities below this floor are dropped before renormalizing
    pub significance_floor: f64,
}

impl Default for EmotionSettings {
    fn default() -> Self {
        Self {
            question_confusion: 0.5,
            question_surprise: 0.4,
            exclamation_boost: 0.6,
            exclamation_surprise: 0.5,
            exclamation_polarity: 0.4,
            caps_multiplier: 1.5,
            negation_penalty: 0.8,
            negation_neutral_bonus: 0.3,
            neutral_mass_threshold: 0.5,
            neutral_injection: 1.0,
            significance_floor: 0.05,
        }
    }
}

/// Sentiment analyzer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentSettings {
    /// Extra weight given to the last sentence relative to the first
    pub recency_bias: f64,

    /// Multiplier for shouted text
    pub caps_multiplier: f64,

    /// Score scale added per exclamation mark
    pub exclamation_step: f64,

    /// Upper bound on the exclamation scale
    pub exclamation_cap: f64,

    /// Dampening per question mark
    pub question_step: f64,

    /// Question marks only dampen scores stronger than this
    pub question_threshold: f64,

    /// Lower bound on the question-mark dampening factor
    pub question_floor: f64,

    /// Score added or subtracted per emoticon
    pub emoticon_weight: f64,

    /// Share of probability mass always reserved for Neutral
    pub neutral_base: f64,

    /// Scores closer to zero than this get a neutral boost
    pub neutral_band: f64,

    /// Scale of the neutral boost inside the band
    pub neutral_boost: f64,
}

impl Default for SentimentSettings {
    fn default() -> Self {
        Self {
            recency_bias: 0.5,
            caps_multiplier: 1.5,
            exclamation_step: 0.2,
            exclamation_cap: 2.0,
            question_step: 0.1,
            question_threshold: 0.5,
            question_floor: 0.5,
            emoticon_weight: 0.3,
            neutral_base: 0.15,
            neutral_band: 0.1,
            neutral_boost: 0.5,
        }
    }
}
