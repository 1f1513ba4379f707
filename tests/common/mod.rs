//! Common test utilities and helpers

#![allow(dead_code)]

use lexaffect_core::{AnnotationSpan, Classification};

/// Sum of all predicted probabilities
pub fn prediction_sum(result: &Classification) -> f64 {
    result.predictions.values().sum()
}

/// Concatenated span text
pub fn reconstruct(spans: &[AnnotationSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// `(text, label)` of every tagged span, in order
pub fn tagged_spans(result: &Classification) -> Vec<(String, String)> {
    result
        .annotations
        .iter()
        .filter_map(|s| s.label.as_ref().map(|label| (s.text.clone(), label.clone())))
        .collect()
}

/// Realistic chat messages touching every heuristic
pub fn sample_texts() -> Vec<&'static str> {
    vec![
        "I am happy",
        "I am not happy",
        "I'm not sad, just a bit tired.",
        "The food was great but the service was terrible",
        "WHY WOULD YOU DO THAT?!",
        "What is going on??",
        "I love this so much!!! :)",
        "This is disgusting :(",
        "The meeting is at 3pm",
        "Honestly? I don't know how I feel.",
        "Café was très good. However, the wait wasn't great.",
        "😀 best day ever 🎉",
        "",
        "   ",
    ]
}
