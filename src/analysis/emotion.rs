//! Emotion analyzer
//!
//! Scores text against a multi-category emotion lexicon:
//! - joy, sadness, anger, fear, surprise, love, disgust, confusion
//! - neutral is implicit and absorbs negated or weak signals
//!
//! Negation remaps categories ("not happy" counts as sadness), intensifiers
//! scale hits, and punctuation/capitalization adjust the accumulated mass
//! before it is normalized into a distribution.

use super::{
    annotate::{AnnotationSpan, Annotator, Highlight},
    categories::Emotion,
    classifier::{Classification, Classifier},
    modifiers::ModifierLocator,
    normalize::{emotion_distribution, neutral_emotion},
    palette::ColorScheme,
    scope::{LexiconHit, ScopeResolver},
    signals::TextSignals,
    tokenizer::{segment, Sentence},
    utils::{EmotionLexicon, SentimentLexicon},
};
use crate::error::Result;
use crate::settings::{AffectSettings, CapsSettings, EmotionSettings};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Accumulated mass per emotion
pub type CategoryScore = BTreeMap<Emotion, f64>;

/// Emotion analyzer
#[derive(Debug, Clone)]
pub struct EmotionAnalyzer {
    settings: EmotionSettings,
    caps: CapsSettings,
    locator: ModifierLocator,
    resolver: ScopeResolver,
    colors: ColorScheme,
}

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self::with_settings(&AffectSettings::default())
    }

    pub fn with_settings(settings: &AffectSettings) -> Self {
        Self {
            settings: settings.emotion.clone(),
            caps: settings.caps.clone(),
            locator: ModifierLocator::new(),
            resolver: ScopeResolver::new(&settings.scope),
            colors: ColorScheme::default(),
        }
    }

    /// Locate and resolve every emotion hit in the sentences
    pub fn hits(&self, sentences: &[Sentence]) -> Vec<LexiconHit<Emotion>> {
        let mut hits = Vec::new();

        for sentence in sentences {
            let modifiers = self.locator.locate(&sentence.terms);

            for (position, term) in sentence.terms.iter().enumerate() {
                if let Some(entry) = EmotionLexicon::lookup(&term.normalized) {
                    hits.extend(self.resolver.emotion_hits(
                        &sentence.terms,
                        position,
                        entry,
                        &modifiers,
                        sentence.index,
                        &self.settings,
                    ));
                }
            }
        }

        hits
    }

    /// Accumulated and adjusted mass per category for a text
    pub fn scores(&self, text: &str) -> CategoryScore {
        let sentences = segment(text);
        let hits = self.hits(&sentences);
        self.aggregate(text, &sentences, &hits)
    }

    fn aggregate(
        &self,
        text: &str,
        sentences: &[Sentence],
        hits: &[LexiconHit<Emotion>],
    ) -> CategoryScore {
        let mut counts = CategoryScore::new();
        for hit in hits {
            let entry = counts.entry(hit.category).or_insert(0.0);
            *entry = (*entry + hit.weight()).max(0.0);
        }

        let terms: Vec<_> = sentences.iter().flat_map(|s| s.terms.iter().cloned()).collect();
        let signals = TextSignals::collect(text, &terms, &self.caps);
        let s = &self.settings;

        // Question marks
        if signals.question_marks > 0 {
            let q = signals.question_marks as f64;
            *counts.entry(Emotion::Confusion).or_insert(0.0) += s.question_confusion * q;
            if signals.question_marks >= 2 {
                *counts.entry(Emotion::Surprise).or_insert(0.0) += s.question_surprise * (q - 1.0);
            }
        }

        // Exclamation marks
        if signals.exclamation_marks > 0 {
            let e = signals.exclamation_marks as f64;
            match strongest(&counts) {
                Some(emotion) => {
                    *counts.entry(emotion).or_insert(0.0) += s.exclamation_boost * e;
                }
                None => {
                    *counts.entry(Emotion::Surprise).or_insert(0.0) += s.exclamation_surprise * e;
                    if terms.iter().any(|t| SentimentLexicon::is_positive(&t.normalized)) {
                        *counts.entry(Emotion::Joy).or_insert(0.0) += s.exclamation_polarity * e;
                    } else if terms.iter().any(|t| SentimentLexicon::is_negative(&t.normalized)) {
                        *counts.entry(Emotion::Anger).or_insert(0.0) += s.exclamation_polarity * e;
                    }
                }
            }
        }

        // Shouting
        if signals.is_shouting(&self.caps) {
            if let Some(emotion) = strongest(&counts) {
                trace!(?emotion, "Amplifying strongest emotion for shouted text");
                if let Some(value) = counts.get_mut(&emotion) {
                    *value *= s.caps_multiplier;
                }
            }
        }

        // Weak signal
        let mass: f64 = counts
            .iter()
            .filter(|(emotion, _)| !emotion.is_neutral())
            .map(|(_, v)| *v)
            .sum();
        if mass < s.neutral_mass_threshold {
            *counts.entry(Emotion::Neutral).or_insert(0.0) += s.neutral_injection;
        }

        counts
    }

    fn annotate(&self, text: &str, hits: &[LexiconHit<Emotion>]) -> Vec<AnnotationSpan> {
        let mut annotator = Annotator::new();
        for hit in hits.iter().filter(|h| h.weight() > 0.0) {
            annotator.add(Highlight {
                range: hit.span.clone(),
                core: hit.term.range(),
                label: hit.category.label().to_string(),
                color: self.colors.emotion_color(hit.category).to_string(),
            });
        }
        annotator.render(text)
    }
}

/// Strongest non-neutral emotion with positive mass; ties go to the earlier category
fn strongest(counts: &CategoryScore) -> Option<Emotion> {
    counts
        .iter()
        .filter(|(emotion, v)| !emotion.is_neutral() && **v > 0.0)
        .fold(None, |best: Option<(Emotion, f64)>, (emotion, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((*emotion, v)),
        })
        .map(|(emotion, _)| emotion)
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for EmotionAnalyzer {
    fn name(&self) -> &str {
        "emotion"
    }

    fn classify(&self, text: &str) -> Result<Classification> {
        if text.trim().is_empty() {
            return Ok(Classification {
                predictions: neutral_emotion(),
                annotations: vec![AnnotationSpan::plain(text)],
            });
        }

        let sentences = segment(text);
        let hits = self.hits(&sentences);
        let counts = self.aggregate(text, &sentences, &hits);
        let predictions = emotion_distribution(&counts, self.settings.significance_floor);

        debug!(
            sentences = sentences.len(),
            hits = hits.len(),
            ?predictions,
            "Classified emotion"
        );

        Ok(Classification {
            predictions,
            annotations: self.annotate(text, &hits),
        })
    }
}
