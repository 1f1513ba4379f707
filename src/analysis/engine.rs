//! Engine running both analyzers over the same text

use super::{
    categories::{Emotion, Polarity},
    classifier::{text_from_bytes, text_from_json, Classification, Classifier},
    emotion::EmotionAnalyzer,
    sentiment::SentimentAnalyzer,
};
use crate::error::Result;
use crate::settings::AffectSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Combined emotion and sentiment result
///
/// Carries the summary fields a chat front end needs for prompt
/// construction and badges next to the full classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectReport {
    pub emotion: Classification,
    pub sentiment: Classification,

    /// Highest-probability emotion label
    pub primary_emotion: String,

    /// Probability of the primary emotion
    pub emotion_confidence: f64,

    /// Highest-probability sentiment label
    pub sentiment_label: String,

    /// `max(Positive, Negative)`
    pub sentiment_strength: f64,
}

/// Engine coordinating the emotion and sentiment analyzers
#[derive(Debug, Clone, Default)]
pub struct AffectEngine {
    emotion: EmotionAnalyzer,
    sentiment: SentimentAnalyzer,
}

impl AffectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create engine with custom settings
    pub fn with_settings(settings: &AffectSettings) -> Self {
        Self {
            emotion: EmotionAnalyzer::with_settings(settings),
            sentiment: SentimentAnalyzer::with_settings(settings),
        }
    }

    pub fn emotion(&self) -> &EmotionAnalyzer {
        &self.emotion
    }

    pub fn sentiment(&self) -> &SentimentAnalyzer {
        &self.sentiment
    }

    /// Classifier by name ("emotion" or "sentiment")
    pub fn classifier(&self, name: &str) -> Option<&dyn Classifier> {
        match name {
            "emotion" => Some(&self.emotion),
            "sentiment" => Some(&self.sentiment),
            _ => None,
        }
    }

    /// Run both analyzers and summarize
    pub fn analyze(&self, text: &str) -> Result<AffectReport> {
        let emotion = self.emotion.classify(text)?;
        let sentiment = self.sentiment.classify(text)?;

        let (primary_emotion, emotion_confidence) = emotion
            .primary()
            .map(|(label, p)| (label.to_string(), p))
            .unwrap_or_else(|| (Emotion::Neutral.label().to_string(), 1.0));
        let sentiment_label = sentiment
            .primary()
            .map(|(label, _)| label.to_string())
            .unwrap_or_else(|| Polarity::Neutral.label().to_string());
        let sentiment_strength = sentiment.strength();

        Ok(AffectReport {
            emotion,
            sentiment,
            primary_emotion,
            emotion_confidence,
            sentiment_label,
            sentiment_strength,
        })
    }

    /// Run both analyzers over raw bytes, which must be UTF-8
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AffectReport> {
        self.analyze(text_from_bytes(bytes)?)
    }

    /// Run both analyzers over a JSON string value
    pub fn analyze_json(&self, value: &Value) -> Result<AffectReport> {
        self.analyze(text_from_json(value)?)
    }
}

/// Builder for AffectEngine
pub struct EngineBuilder {
    settings: AffectSettings,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            settings: AffectSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AffectSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> AffectEngine {
        AffectEngine::with_settings(&self.settings)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
