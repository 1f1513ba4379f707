//! Common regex patterns for the analyzers
//!
//! Pre-compiled once per process and shared by reference.

use once_cell::sync::Lazy;
use regex::Regex;

/// Common patterns used across analyzers
pub struct CommonPatterns;

impl CommonPatterns {
    /// Word terms: letters/digits with inner apostrophes (don't, can’t)
    pub fn word() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*")
                .expect("Valid word regex")
        });
        &PATTERN
    }

    /// Sentences: a run of text up to and including its terminators
    pub fn sentence() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[^.!?]+[.!?]*")
                .expect("Valid sentence regex")
        });
        &PATTERN
    }

    /// Positive emoticons and emoji
    pub fn positive_emoticon() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[:;=]-?[)\]]|[:;=]-?[DPp]\b|<3|[😀😃😄😁😊😍🥰😂👍❤🎉]")
                .expect("Valid positive emoticon regex")
        });
        &PATTERN
    }

    /// Negative emoticons and emoji
    pub fn negative_emoticon() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r">?[:=]'?-?[(\[]|</3|[😢😞😡😠😭👎💔😔]")
                .expect("Valid negative emoticon regex")
        });
        &PATTERN
    }
}
