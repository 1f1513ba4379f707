//! Lexaffect - Deterministic Lexical Emotion and Sentiment Classification
//!
//! A rule-based text classifier that provides:
//! - Emotion distributions over nine categories (joy, sadness, anger, ...)
//! - Positive/Neutral/Negative sentiment distributions
//! - Negation, intensifier and contrast-conjunction handling
//! - Gapless colored span annotations for UI highlighting
//!
//! # Architecture
//!
//! - **Analysis**: tokenizer, lexicons, scope resolution, analyzers
//! - **Settings**: tunable constants loaded from TOML and environment
//! - **Error**: crate-wide error type
//!
//! # Example
//!
//! ```rust
//! use lexaffect_core::AffectEngine;
//!
//! let engine = AffectEngine::new();
//! let report = engine.analyze("I am not happy with this, it is terrible").unwrap();
//!
//! assert_eq!(report.primary_emotion, "sadness");
//! assert_eq!(report.sentiment_label, "Negative");
//! ```

pub mod analysis;
pub mod error;
pub mod settings;

// Re-export commonly used types
pub use analysis::{
    AffectEngine, AffectReport, AnnotationSpan, Classification, Classifier, Distribution, Emotion,
    EmotionAnalyzer, EngineBuilder, Polarity, SentimentAnalyzer,
};
pub use error::{AffectError, Result};
pub use settings::AffectSettings;
