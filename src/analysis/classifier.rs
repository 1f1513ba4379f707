//! Classifier seam shared by the emotion and sentiment analyzers

use super::annotate::AnnotationSpan;
use super::categories::Polarity;
use super::normalize::Distribution;
use crate::error::{AffectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of classifying one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Label → probability, summing to 1.0
    pub predictions: Distribution,

    /// Gapless highlight spans covering the input
    pub annotations: Vec<AnnotationSpan>,
}

impl Classification {
    /// Highest-probability label; ties go to the label that sorts first
    pub fn primary(&self) -> Option<(&str, f64)> {
        self.predictions
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (label, &p)| match best {
                Some((_, b)) if b >= p => best,
                _ => Some((label.as_str(), p)),
            })
    }

    /// Confidence of the result
    ///
    /// For sentiment distributions this is `max(Positive, Negative)`, so a
    /// neutral text has zero strength. Otherwise it is the top probability.
    pub fn strength(&self) -> f64 {
        let positive = self.predictions.get(Polarity::Positive.label());
        let negative = self.predictions.get(Polarity::Negative.label());
        match (positive, negative) {
            (Some(p), Some(n)) => p.max(*n),
            _ => self.primary().map(|(_, p)| p).unwrap_or(0.0),
        }
    }

    /// Probability of a label, 0.0 when absent
    pub fn probability(&self, label: &str) -> f64 {
        self.predictions.get(label).copied().unwrap_or(0.0)
    }
}

/// A deterministic text classifier
///
/// Implementations hold only immutable configuration, so one instance can
/// be shared across threads.
pub trait Classifier: Send + Sync {
    /// Short name of the classifier ("emotion", "sentiment")
    fn name(&self) -> &str;

    /// Classify well-formed text
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Classify raw bytes, rejecting anything that is not UTF-8
    fn classify_bytes(&self, bytes: &[u8]) -> Result<Classification> {
        self.classify(text_from_bytes(bytes)?)
    }

    /// Classify a JSON value, which must be a string
    fn classify_json(&self, value: &Value) -> Result<Classification> {
        self.classify(text_from_json(value)?)
    }
}

/// Borrow raw bytes as text
pub fn text_from_bytes(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| AffectError::invalid_input(format!("input is not valid UTF-8: {}", e)))
}

/// Borrow a JSON string value as text
pub fn text_from_json(value: &Value) -> Result<&str> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(AffectError::invalid_input(format!(
            "expected a string, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
