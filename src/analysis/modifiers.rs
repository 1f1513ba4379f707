//! Negation, intensifier and contrast-conjunction locator
//!
//! Tags every modifier term of a sentence with its token position:
//! - Negation: not, never, don't, without, hardly ...
//! - Intensifier: very (×1.5), extremely (×2.0), slightly (×0.5), "a bit" ...
//! - Contrast: but, however, although ...
//!
//! A position holds at most one kind of modifier, checked in that order.

use super::tokenizer::Term;
use super::utils::ModifierDictionaries;

/// Kind of modifier found at a position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierKind {
    Negation,
    Intensifier(f64),
    Contrast,
}

/// Position-indexed modifier lists for one term sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierMap {
    /// Positions of negation terms
    pub negations: Vec<usize>,
    /// Positions of intensifiers with their multipliers
    pub intensifiers: Vec<(usize, f64)>,
    /// Positions of contrast conjunctions
    pub contrasts: Vec<usize>,
}

/// Modifier locator
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierLocator;

impl ModifierLocator {
    pub fn new() -> Self {
        Self
    }

    /// Locate all modifiers in a term sequence
    pub fn locate(&self, terms: &[Term]) -> ModifierMap {
        let mut map = ModifierMap::default();
        let mut position = 0;

        while position < terms.len() {
            // Two-word phrases win over their single tokens and are recorded
            // at the position of their last word.
            if let Some(multiplier) = Self::phrase_at(terms, position) {
                map.intensifiers.push((position + 1, multiplier));
                position += 2;
                continue;
            }

            if let Some(kind) = Self::classify(&terms[position].normalized) {
                match kind {
                    ModifierKind::Negation => map.negations.push(position),
                    ModifierKind::Intensifier(multiplier) => {
                        map.intensifiers.push((position, multiplier))
                    }
                    ModifierKind::Contrast => map.contrasts.push(position),
                }
            }
            position += 1;
        }

        map
    }

    /// Classify a single normalized word
    pub fn classify(word: &str) -> Option<ModifierKind> {
        if ModifierDictionaries::negations().contains(word) {
            Some(ModifierKind::Negation)
        } else if let Some(&multiplier) = ModifierDictionaries::intensifiers().get(word) {
            Some(ModifierKind::Intensifier(multiplier))
        } else if ModifierDictionaries::contrasts().contains(word) {
            Some(ModifierKind::Contrast)
        } else {
            None
        }
    }

    fn phrase_at(terms: &[Term], position: usize) -> Option<f64> {
        let first = terms.get(position)?;
        let second = terms.get(position + 1)?;
        ModifierDictionaries::phrase_intensifiers()
            .iter()
            .find(|(a, b, _)| first.normalized == *a && second.normalized == *b)
            .map(|&(_, _, multiplier)| multiplier)
    }
}
