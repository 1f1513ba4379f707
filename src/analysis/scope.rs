//! Negation and intensifier scope resolution
//!
//! For a lexicon hit at token position `p`:
//! - it is negated iff a negation sits at `n < p` with `p - n <= negation_window`
//! - its intensity is the largest multiplier among intensifiers at `i < p`
//!   with `p - i <= intensifier_window`, or 1.0
//!
//! Negation never edits a hit. It produces new hits, possibly in another
//! category: sentiment flips and dampens the score, emotion consults the
//! [`NegationRule`] table.

use super::categories::{Emotion, Polarity};
use super::modifiers::ModifierMap;
use super::tokenizer::Term;
use crate::settings::{EmotionSettings, ScopeSettings};
use serde::Serialize;
use std::ops::Range;
use tracing::trace;

/// A matched lexicon word with its resolved modifiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconHit<C> {
    pub term: Term,
    /// Category this hit counts toward
    pub category: C,
    /// Lexicon category of the word itself
    pub matched: C,
    pub base_weight: f64,
    pub negated: bool,
    pub intensity: f64,
    pub sentence_index: usize,
    /// Display range: the negation term through the hit for negated hits
    pub span: Range<usize>,
}

impl<C> LexiconHit<C> {
    /// Contribution of this hit to its category
    pub fn weight(&self) -> f64 {
        self.base_weight * self.intensity
    }
}

/// Resolved modifier context of one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scope {
    /// Position of the nearest negation inside the window
    pub negation: Option<usize>,
    /// Intensity multiplier, 1.0 when no intensifier applies
    pub intensity: f64,
}

impl Scope {
    pub fn negated(&self) -> bool {
        self.negation.is_some()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            negation: None,
            intensity: 1.0,
        }
    }
}

/// What a negated emotion hit turns into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NegationRule {
    /// Count toward `target` at `weight` instead
    Remap { target: Emotion, weight: f64 },
    /// Reduce the category itself and spill a little mass to neutral
    Dampen,
}

/// Remap table for negated emotions. "not happy" is sadness, but "not sad"
/// is only weakly joyful.
pub const NEGATION_REMAPS: [(Emotion, NegationRule); 4] = [
    (
        Emotion::Joy,
        NegationRule::Remap {
            target: Emotion::Sadness,
            weight: 1.0,
        },
    ),
    (
        Emotion::Sadness,
        NegationRule::Remap {
            target: Emotion::Joy,
            weight: 0.7,
        },
    ),
    (
        Emotion::Love,
        NegationRule::Remap {
            target: Emotion::Anger,
            weight: 0.8,
        },
    ),
    (
        Emotion::Anger,
        NegationRule::Remap {
            target: Emotion::Neutral,
            weight: 0.9,
        },
    ),
];

impl NegationRule {
    /// Rule applied to a negated hit of `emotion`
    pub fn for_emotion(emotion: Emotion) -> Self {
        NEGATION_REMAPS
            .iter()
            .find(|(source, _)| *source == emotion)
            .map(|(_, rule)| *rule)
            .unwrap_or(NegationRule::Dampen)
    }
}

/// Scope resolver
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    negation_window: usize,
    intensifier_window: usize,
    sentiment_negation_factor: f64,
}

impl ScopeResolver {
    pub fn new(settings: &ScopeSettings) -> Self {
        Self {
            negation_window: settings.negation_window,
            intensifier_window: settings.intensifier_window,
            sentiment_negation_factor: settings.sentiment_negation_factor,
        }
    }

    /// Resolve negation and intensity for the term at `position`
    pub fn resolve(&self, modifiers: &ModifierMap, position: usize) -> Scope {
        let in_window = |p: usize, window: usize| p < position && position - p <= window;

        let negation = modifiers
            .negations
            .iter()
            .copied()
            .filter(|&n| in_window(n, self.negation_window))
            .max();

        let intensity = modifiers
            .intensifiers
            .iter()
            .filter(|(i, _)| in_window(*i, self.intensifier_window))
            .map(|&(_, multiplier)| multiplier)
            .fold(None, |best: Option<f64>, m| Some(best.map_or(m, |b| b.max(m))))
            .unwrap_or(1.0);

        Scope {
            negation,
            intensity,
        }
    }

    /// Display range for a hit: widened back to its negation term if negated
    fn span(terms: &[Term], position: usize, scope: &Scope) -> Range<usize> {
        let term = &terms[position];
        match scope.negation.and_then(|n| terms.get(n)) {
            Some(negation) => negation.start..term.end,
            None => term.range(),
        }
    }

    /// Build the sentiment hit for a scored word
    pub fn sentiment_hit(
        &self,
        terms: &[Term],
        position: usize,
        score: f64,
        modifiers: &ModifierMap,
        sentence_index: usize,
    ) -> LexiconHit<Polarity> {
        let scope = self.resolve(modifiers, position);
        let base_weight = if scope.negated() {
            -score * self.sentiment_negation_factor
        } else {
            score
        };

        LexiconHit {
            term: terms[position].clone(),
            category: Polarity::of(base_weight),
            matched: Polarity::of(score),
            base_weight,
            negated: scope.negated(),
            intensity: scope.intensity,
            sentence_index,
            span: Self::span(terms, position, &scope),
        }
    }

    /// Build the emotion hits for a matched word
    ///
    /// A non-negated word yields one hit. A negated word yields the remapped
    /// hit, or for categories without a remap rule a flat penalty on its own
    /// category plus a flat neutral bonus. Intensifiers do not scale either.
    pub fn emotion_hits(
        &self,
        terms: &[Term],
        position: usize,
        (emotion, base_weight): (Emotion, f64),
        modifiers: &ModifierMap,
        sentence_index: usize,
        settings: &EmotionSettings,
    ) -> Vec<LexiconHit<Emotion>> {
        let scope = self.resolve(modifiers, position);
        let hit = LexiconHit {
            term: terms[position].clone(),
            category: emotion,
            matched: emotion,
            base_weight,
            negated: scope.negated(),
            intensity: scope.intensity,
            sentence_index,
            span: Self::span(terms, position, &scope),
        };

        if !scope.negated() {
            return vec![hit];
        }

        let rule = NegationRule::for_emotion(emotion);
        trace!(word = %hit.term.text, ?emotion, ?rule, "Negated emotion hit");

        match rule {
            NegationRule::Remap { target, weight } => vec![LexiconHit {
                category: target,
                base_weight: base_weight * weight,
                ..hit
            }],
            NegationRule::Dampen => {
                let bonus = LexiconHit {
                    category: Emotion::Neutral,
                    base_weight: settings.negation_neutral_bonus,
                    intensity: 1.0,
                    ..hit.clone()
                };
                let penalty = LexiconHit {
                    base_weight: -settings.negation_penalty,
                    intensity: 1.0,
                    ..hit
                };
                vec![penalty, bonus]
            }
        }
    }
}

impl Default for ScopeResolver {
    fn default() -> Self {
        Self::new(&ScopeSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::modifiers::ModifierLocator;
    use crate::analysis::tokenizer::terms;

    fn scope_of(text: &str, position: usize) -> Scope {
        let terms = terms(text);
        let modifiers = ModifierLocator::new().locate(&terms);
        ScopeResolver::default().resolve(&modifiers, position)
    }

    #[test]
    fn test_negation_window() {
        // not(0) x(1) y(2) happy(3): distance 3 is inside the window
        assert!(scope_of("not really very happy", 3).negated());
        // distance 4 is outside
        assert!(!scope_of("not one two three happy", 4).negated());
    }

    #[test]
    fn test_negation_only_looks_backward() {
        assert!(!scope_of("happy not", 0).negated());
    }

    #[test]
    fn test_intensity_window_takes_maximum() {
        let scope = scope_of("extremely very good", 2);
        assert_eq!(scope.intensity, 2.0);

        // extremely is three tokens back, outside the window of two
        let scope = scope_of("extremely the very good", 3);
        assert_eq!(scope.intensity, 1.5);
    }

    #[test]
    fn test_defaults_without_modifiers() {
        let scope = scope_of("the food was good", 3);
        assert_eq!(scope, Scope::default());
    }

    #[test]
    fn test_remap_table() {
        assert_eq!(
            NegationRule::for_emotion(Emotion::Joy),
            NegationRule::Remap {
                target: Emotion::Sadness,
                weight: 1.0
            }
        );
        assert_eq!(
            NegationRule::for_emotion(Emotion::Sadness),
            NegationRule::Remap {
                target: Emotion::Joy,
                weight: 0.7
            }
        );
        assert_eq!(
            NegationRule::for_emotion(Emotion::Love),
            NegationRule::Remap {
                target: Emotion::Anger,
                weight: 0.8
            }
        );
        assert_eq!(
            NegationRule::for_emotion(Emotion::Anger),
            NegationRule::Remap {
                target: Emotion::Neutral,
                weight: 0.9
            }
        );
        assert_eq!(NegationRule::for_emotion(Emotion::Fear), NegationRule::Dampen);
    }

    #[test]
    fn test_negated_sentiment_flips_and_dampens() {
        let terms = terms("not good");
        let modifiers = ModifierLocator::new().locate(&terms);
        let hit = ScopeResolver::default().sentiment_hit(&terms, 1, 0.6, &modifiers, 0);

        assert!(hit.negated);
        assert!((hit.weight() + 0.48).abs() < 1e-9);
        assert_eq!(hit.category, Polarity::Negative);
        assert_eq!(hit.matched, Polarity::Positive);
        assert_eq!(hit.span, 0..8);
    }

    #[test]
    fn test_negated_fear_dampens_and_spills_to_neutral() {
        let terms = terms("not scared");
        let modifiers = ModifierLocator::new().locate(&terms);
        let hits = ScopeResolver::default().emotion_hits(
            &terms,
            1,
            (Emotion::Fear, 1.0),
            &modifiers,
            0,
            &EmotionSettings::default(),
        );

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, Emotion::Fear);
        assert!((hits[0].weight() + 0.8).abs() < 1e-9);
        assert_eq!(hits[1].category, Emotion::Neutral);
        assert!((hits[1].weight() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_intensified_dampen_stays_flat() {
        let terms = terms("not very scared");
        let modifiers = ModifierLocator::new().locate(&terms);
        let hits = ScopeResolver::default().emotion_hits(
            &terms,
            2,
            (Emotion::Fear, 1.0),
            &modifiers,
            0,
            &EmotionSettings::default(),
        );

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, Emotion::Fear);
        assert!((hits[0].weight() + 0.8).abs() < 1e-9);
        assert_eq!(hits[1].category, Emotion::Neutral);
        assert!((hits[1].weight() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_negated_joy_becomes_sadness() {
        let terms = terms("not very happy");
        let modifiers = ModifierLocator::new().locate(&terms);
        let hits = ScopeResolver::default().emotion_hits(
            &terms,
            2,
            (Emotion::Joy, 1.0),
            &modifiers,
            0,
            &EmotionSettings::default(),
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Emotion::Sadness);
        assert_eq!(hits[0].matched, Emotion::Joy);
        assert!((hits[0].weight() - 1.5).abs() < 1e-9);
        assert_eq!(hits[0].span, 0..14);
    }
}
