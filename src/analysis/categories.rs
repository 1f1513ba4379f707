//! Category labels shared by lexicons, resolvers and normalizers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion category
///
/// Declaration order is the tie-break order whenever two categories carry
/// the same mass, which keeps results deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Love,
    Disgust,
    Confusion,
    Neutral,
}

impl Emotion {
    /// All categories in tie-break order
    pub const ALL: [Emotion; 9] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Love,
        Emotion::Disgust,
        Emotion::Confusion,
        Emotion::Neutral,
    ];

    /// Distribution key for this category
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Love => "love",
            Emotion::Disgust => "disgust",
            Emotion::Confusion => "confusion",
            Emotion::Neutral => "neutral",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Emotion::Neutral)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    /// Distribution key for this polarity
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Neutral => "Neutral",
            Polarity::Negative => "Negative",
        }
    }

    /// Polarity of a signed score
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_labels_are_lowercase() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.label(), emotion.label().to_lowercase());
        }
        assert_eq!(Emotion::Joy.to_string(), "joy");
    }

    #[test]
    fn test_emotion_serde_matches_label() {
        let json = serde_json::to_string(&Emotion::Confusion).unwrap();
        assert_eq!(json, "\"confusion\"");
    }

    #[test]
    fn test_polarity_of_score() {
        assert_eq!(Polarity::of(0.4), Polarity::Positive);
        assert_eq!(Polarity::of(-0.1), Polarity::Negative);
        assert_eq!(Polarity::of(0.0), Polarity::Neutral);
    }
}
