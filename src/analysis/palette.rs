//! Highlight colors for annotation spans
//!
//! The palette is owned by the engine so every front end renders the same
//! colors. Values are `#RRGGBB` strings.

use super::categories::{Emotion, Polarity};

/// Color scheme for annotation spans
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Emotion colors
    pub joy: &'static str,
    pub sadness: &'static str,
    pub anger: &'static str,
    pub fear: &'static str,
    pub surprise: &'static str,
    pub love: &'static str,
    pub disgust: &'static str,
    pub confusion: &'static str,
    pub neutral: &'static str,

    /// Sentiment shades, strongest first
    pub positive: [&'static str; 3],
    pub negative: [&'static str; 3],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            joy: "#FFC107",       // Amber
            sadness: "#2196F3",   // Blue
            anger: "#F44336",     // Red
            fear: "#9C27B0",      // Purple
            surprise: "#FF9800",  // Orange
            love: "#E91E63",      // Pink
            disgust: "#4CAF50",   // Green
            confusion: "#795548", // Brown
            neutral: "#9E9E9E",   // Grey

            positive: ["#1B5E20", "#43A047", "#A5D6A7"],
            negative: ["#B71C1C", "#E53935", "#FB8C00"],
        }
    }
}

impl ColorScheme {
    /// Get color for an emotion category
    pub fn emotion_color(&self, emotion: Emotion) -> &'static str {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Love => self.love,
            Emotion::Disgust => self.disgust,
            Emotion::Confusion => self.confusion,
            Emotion::Neutral => self.neutral,
        }
    }

    /// Get color for a sentiment hit, graded by the magnitude of its score
    pub fn sentiment_color(&self, score: f64) -> Option<&'static str> {
        let shades = match Polarity::of(score) {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
            Polarity::Neutral => return None,
        };

        let magnitude = score.abs();
        let shade = if magnitude >= 0.7 {
            shades[0]
        } else if magnitude >= 0.4 {
            shades[1]
        } else {
            shades[2]
        };
        Some(shade)
    }
}

/// Parse a `#RRGGBB` color into its components
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_palette() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.emotion_color(Emotion::Joy), "#FFC107");
        assert_eq!(scheme.emotion_color(Emotion::Sadness), "#2196F3");
    }

    #[test]
    fn test_sentiment_shades_are_graded() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.sentiment_color(0.9), Some("#1B5E20"));
        assert_eq!(scheme.sentiment_color(0.5), Some("#43A047"));
        assert_eq!(scheme.sentiment_color(0.2), Some("#A5D6A7"));
        assert_eq!(scheme.sentiment_color(-0.64), Some("#E53935"));
        assert_eq!(scheme.sentiment_color(-0.3), Some("#FB8C00"));
        assert_eq!(scheme.sentiment_color(0.0), None);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FFC107"), Some((255, 193, 7)));
        assert_eq!(parse_hex("FFC107"), None);
        assert_eq!(parse_hex("#FFF"), None);
    }
}
