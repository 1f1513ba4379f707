//! Utility modules for lexical analysis

pub mod dictionaries;
pub mod patterns;

pub use dictionaries::{EmotionLexicon, ModifierDictionaries, SentimentLexicon};
pub use patterns::CommonPatterns;
