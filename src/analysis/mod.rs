//! Lexical emotion and sentiment analysis
//!
//! Two rule-based analyzers share one pipeline:
//!
//! ```text
//! text ─► tokenizer ─► modifiers ─► lexicon hits ─► scope ─► aggregate ─► normalize
//!                                         │
//!                                         └──────────► annotate (span highlights)
//! ```
//!
//! - **Tokenizer**: sentences and position-tracked terms in one pass
//! - **Modifiers**: negations, intensifiers ("very", "a bit"), contrast conjunctions
//! - **Scope**: backward windows decide negation and intensity per hit
//! - **Aggregate**: per-category (emotion) or signed (sentiment) totals plus
//!   punctuation, capitalization and emoticon heuristics
//! - **Normalize**: bounded probability distribution summing to 1.0
//! - **Annotate**: gapless colored spans for UI highlighting
//!
//! ## Usage
//!
//! ```rust
//! use lexaffect_core::analysis::{Classifier, EmotionAnalyzer, SentimentAnalyzer};
//!
//! let emotion = EmotionAnalyzer::new().classify("I am not happy").unwrap();
//! assert_eq!(emotion.primary().map(|(label, _)| label), Some("sadness"));
//!
//! let sentiment = SentimentAnalyzer::new()
//!     .classify("The food was great but the service was terrible")
//!     .unwrap();
//! assert!(sentiment.probability("Negative") > sentiment.probability("Positive"));
//! ```

pub mod annotate;
pub mod categories;
pub mod classifier;
pub mod emotion;
pub mod engine;
pub mod modifiers;
pub mod normalize;
pub mod palette;
pub mod scope;
pub mod sentiment;
pub mod signals;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use annotate::{AnnotationSpan, Annotator, Highlight};
pub use categories::{Emotion, Polarity};
pub use classifier::{text_from_bytes, text_from_json, Classification, Classifier};
pub use emotion::EmotionAnalyzer;
pub use engine::{AffectEngine, AffectReport, EngineBuilder};
pub use normalize::Distribution;
pub use palette::ColorScheme;
pub use scope::{LexiconHit, NegationRule, ScopeResolver};
pub use sentiment::SentimentAnalyzer;
pub use tokenizer::{segment, Sentence, Term};
