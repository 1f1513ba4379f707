//! Sentiment analyzer
//!
//! Scores text against a signed positive/negative lexicon. Each sentence is
//! split at its first non-initial contrast conjunction and the clause after
//! it weighs more ("good but disappointing" is net negative). Sentence scores
//! are averaged with a recency bias, adjusted for shouting, punctuation and
//! emoticons, and mapped into Positive/Neutral/Negative shares.

use super::{
    annotate::{AnnotationSpan, Annotator, Highlight},
    categories::Polarity,
    classifier::{Classification, Classifier},
    modifiers::ModifierLocator,
    normalize::{neutral_sentiment, sentiment_distribution},
    palette::ColorScheme,
    scope::{LexiconHit, ScopeResolver},
    signals::TextSignals,
    tokenizer::{segment, Sentence, Term},
    utils::SentimentLexicon,
};
use crate::error::Result;
use crate::settings::{AffectSettings, CapsSettings, SentimentSettings};
use tracing::{debug, trace};

/// Signed score of one sentence with the hits that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SignedScore {
    pub sentence_index: usize,
    pub score: f64,
    pub hits: Vec<LexiconHit<Polarity>>,
}

/// Sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    settings: SentimentSettings,
    caps: CapsSettings,
    contrast_weight: f64,
    locator: ModifierLocator,
    resolver: ScopeResolver,
    colors: ColorScheme,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::with_settings(&AffectSettings::default())
    }

    pub fn with_settings(settings: &AffectSettings) -> Self {
        Self {
            settings: settings.sentiment.clone(),
            caps: settings.caps.clone(),
            contrast_weight: settings.scope.contrast_weight,
            locator: ModifierLocator::new(),
            resolver: ScopeResolver::new(&settings.scope),
            colors: ColorScheme::default(),
        }
    }

    /// Score one clause: the sum of its resolved hits
    fn score_clause(&self, terms: &[Term], sentence_index: usize) -> (f64, Vec<LexiconHit<Polarity>>) {
        let modifiers = self.locator.locate(terms);
        let hits: Vec<_> = terms
            .iter()
            .enumerate()
            .filter_map(|(position, term)| {
                SentimentLexicon::score(&term.normalized).map(|score| {
                    self.resolver
                        .sentiment_hit(terms, position, score, &modifiers, sentence_index)
                })
            })
            .collect();

        (hits.iter().map(|h| h.weight()).sum(), hits)
    }

    /// Score one sentence, splitting it at a contrast conjunction
    pub fn score_sentence(&self, sentence: &Sentence) -> SignedScore {
        let split = self
            .locator
            .locate(&sentence.terms)
            .contrasts
            .into_iter()
            .find(|&position| position > 0);

        let (score, hits) = match split {
            Some(position) => {
                let (first, mut first_hits) =
                    self.score_clause(&sentence.terms[..position], sentence.index);
                let (second, second_hits) =
                    self.score_clause(&sentence.terms[position + 1..], sentence.index);
                trace!(
                    sentence = sentence.index,
                    first,
                    second,
                    "Weighting clause after contrast conjunction"
                );
                first_hits.extend(second_hits);
                (first + self.contrast_weight * second, first_hits)
            }
            None => self.score_clause(&sentence.terms, sentence.index),
        };

        SignedScore {
            sentence_index: sentence.index,
            score,
            hits,
        }
    }

    /// Recency-weighted average of sentence scores
    pub fn combine(&self, scores: &[SignedScore]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }

        let total = scores.len() as f64;
        let (weighted, weights) = scores.iter().enumerate().fold((0.0, 0.0), |(sum, w_sum), (i, s)| {
            let weight = 1.0 + (i as f64 / total) * self.settings.recency_bias;
            (sum + weight * s.score, w_sum + weight)
        });
        weighted / weights
    }

    /// Apply the text-level adjustments, in order, and clamp to [-1, 1]
    pub fn adjust(&self, score: f64, signals: &TextSignals) -> f64 {
        let s = &self.settings;
        let mut score = score;

        if signals.is_shouting(&self.caps) {
            score *= s.caps_multiplier;
        }

        if signals.exclamation_marks > 0 {
            let scale = 1.0 + signals.exclamation_marks as f64 * s.exclamation_step;
            score *= scale.min(s.exclamation_cap);
        }

        if signals.question_marks > 0 && score.abs() > s.question_threshold {
            let damp = 1.0 - signals.question_marks as f64 * s.question_step;
            score *= damp.max(s.question_floor);
        }

        score += signals.emoticon_balance() as f64 * s.emoticon_weight;

        score.clamp(-1.0, 1.0)
    }

    /// Final signed score of a text in [-1, 1]
    pub fn score(&self, text: &str) -> f64 {
        let sentences = segment(text);
        let scores: Vec<_> = sentences.iter().map(|s| self.score_sentence(s)).collect();
        self.finish(text, &sentences, &scores)
    }

    fn finish(&self, text: &str, sentences: &[Sentence], scores: &[SignedScore]) -> f64 {
        let terms: Vec<_> = sentences.iter().flat_map(|s| s.terms.iter().cloned()).collect();
        let signals = TextSignals::collect(text, &terms, &self.caps);
        self.adjust(self.combine(scores), &signals)
    }

    fn annotate(&self, text: &str, scores: &[SignedScore]) -> Vec<AnnotationSpan> {
        let mut annotator = Annotator::new();
        for hit in scores.iter().flat_map(|s| s.hits.iter()) {
            let weight = hit.weight();
            if let Some(color) = self.colors.sentiment_color(weight) {
                annotator.add(Highlight {
                    range: hit.span.clone(),
                    core: hit.term.range(),
                    label: Polarity::of(weight).label().to_string(),
                    color: color.to_string(),
                });
            }
        }
        annotator.render(text)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for SentimentAnalyzer {
    fn name(&self) -> &str {
        "sentiment"
    }

    fn classify(&self, text: &str) -> Result<Classification> {
        if text.trim().is_empty() {
            return Ok(Classification {
                predictions: neutral_sentiment(),
                annotations: vec![AnnotationSpan::plain(text)],
            });
        }

        let sentences = segment(text);
        let scores: Vec<_> = sentences.iter().map(|s| self.score_sentence(s)).collect();
        let score = self.finish(text, &sentences, &scores);
        let predictions = sentiment_distribution(score, &self.settings);

        debug!(sentences = sentences.len(), score, ?predictions, "Classified sentiment");

        Ok(Classification {
            predictions,
            annotations: self.annotate(text, &scores),
        })
    }
}
