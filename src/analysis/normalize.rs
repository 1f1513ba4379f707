//! Score-to-probability conversion
//!
//! - Emotion: per-category share of the total mass, with a significance floor
//!   and renormalization over the survivors.
//! - Sentiment: a signed score mapped into Positive/Neutral/Negative shares,
//!   always leaving some mass on Neutral.
//!
//! Both return distributions rounded to three decimals that sum to 1.0.

use super::categories::{Emotion, Polarity};
use crate::settings::SentimentSettings;
use std::collections::BTreeMap;
use tracing::debug;

/// Label → probability
pub type Distribution = BTreeMap<String, f64>;

/// Canonical emotion result for text without emotional content
pub fn neutral_emotion() -> Distribution {
    BTreeMap::from([(Emotion::Neutral.label().to_string(), 1.0)])
}

/// Canonical sentiment result for text without sentiment
pub fn neutral_sentiment() -> Distribution {
    BTreeMap::from([
        (Polarity::Positive.label().to_string(), 0.0),
        (Polarity::Neutral.label().to_string(), 1.0),
        (Polarity::Negative.label().to_string(), 0.0),
    ])
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to three decimals and hand the rounding residue to the largest entry
fn settle(distribution: &mut Distribution) {
    for value in distribution.values_mut() {
        *value = round3(*value);
    }

    let residue = 1.0 - distribution.values().sum::<f64>();
    let largest = distribution
        .iter()
        .fold(None, |best: Option<(&String, f64)>, (label, &p)| match best {
            Some((_, b)) if b >= p => best,
            _ => Some((label, p)),
        })
        .map(|(label, _)| label.clone());

    if let Some(label) = largest {
        if let Some(value) = distribution.get_mut(&label) {
            *value = round3(*value + residue);
        }
    }
}

/// Convert accumulated emotion mass into a distribution
pub fn emotion_distribution(counts: &BTreeMap<Emotion, f64>, floor: f64) -> Distribution {
    let total: f64 = counts.values().filter(|v| **v > 0.0).sum();
    if !total.is_finite() || total <= 0.0 {
        return neutral_emotion();
    }

    let survivors: BTreeMap<Emotion, f64> = counts
        .iter()
        .filter(|(_, v)| **v > 0.0)
        .map(|(emotion, v)| (*emotion, round3(v / total)))
        .filter(|(_, p)| *p >= floor)
        .collect();

    let kept: f64 = survivors.values().sum();
    if survivors.is_empty() || kept <= 0.0 {
        debug!("No emotion above the significance floor, falling back to neutral");
        return neutral_emotion();
    }

    let mut distribution: Distribution = survivors
        .into_iter()
        .map(|(emotion, p)| (emotion.label().to_string(), p / kept))
        .collect();
    settle(&mut distribution);
    distribution
}

/// Convert a signed sentiment score into a Positive/Neutral/Negative distribution
pub fn sentiment_distribution(score: f64, settings: &SentimentSettings) -> Distribution {
    let score = if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let scale = 1.0 - settings.neutral_base;

    let positive = if score > 0.0 { score * scale } else { 0.0 };
    let negative = if score < 0.0 { -score * scale } else { 0.0 };
    let mut neutral = 1.0 - positive - negative;

    if score.abs() < settings.neutral_band {
        neutral += (settings.neutral_band - score.abs()) * settings.neutral_boost;
    }

    let total = positive + negative + neutral;
    let mut distribution = BTreeMap::from([
        (Polarity::Positive.label().to_string(), positive / total),
        (Polarity::Neutral.label().to_string(), neutral / total),
        (Polarity::Negative.label().to_string(), negative / total),
    ]);
    settle(&mut distribution);
    distribution
}
