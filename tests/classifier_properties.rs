//! Behavioral properties of the emotion and sentiment classifiers
//!
//! Exercises the public API only: distribution bounds, lossless annotations,
//! determinism across calls and threads, and the reference sentences.

mod common;

use common::{prediction_sum, reconstruct, sample_texts, tagged_spans};
use lexaffect_core::analysis::{Classifier, EmotionAnalyzer, SentimentAnalyzer};
use lexaffect_core::{AffectEngine, AffectError};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::thread;

const VOCABULARY: &[&str] = &[
    "I", "am", "the", "food", "was", "it", "happy", "sad", "angry", "love", "hate", "scared",
    "confused", "gross", "wow", "good", "great", "terrible", "bad", "slow", "not", "never",
    "don't", "very", "extremely", "slightly", "so", "a", "bit", "little", "but", "however",
    "although", "HAPPY", "TERRIBLE", ":)", ":(", "<3", "!", "?", ".", ",", "😀", "😢",
];

fn chat_message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..24).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_predictions_sum_to_one(text in chat_message()) {
        let emotion = EmotionAnalyzer::new().classify(&text).unwrap();
        let sentiment = SentimentAnalyzer::new().classify(&text).unwrap();

        prop_assert!((prediction_sum(&emotion) - 1.0).abs() <= 1e-3);
        prop_assert!((prediction_sum(&sentiment) - 1.0).abs() <= 1e-3);
        for p in emotion.predictions.values().chain(sentiment.predictions.values()) {
            prop_assert!((0.0..=1.0).contains(p), "probability out of range: {}", p);
        }
        prop_assert_eq!(sentiment.predictions.len(), 3);
    }

    #[test]
    fn prop_annotations_reproduce_input(text in chat_message()) {
        let emotion = EmotionAnalyzer::new().classify(&text).unwrap();
        let sentiment = SentimentAnalyzer::new().classify(&text).unwrap();

        prop_assert_eq!(reconstruct(&emotion.annotations), text.clone());
        prop_assert_eq!(reconstruct(&sentiment.annotations), text);
    }

    #[test]
    fn prop_arbitrary_unicode_is_handled(text in any::<String>()) {
        let engine = AffectEngine::new();
        let report = engine.analyze(&text).unwrap();

        prop_assert!((prediction_sum(&report.emotion) - 1.0).abs() <= 1e-3);
        prop_assert!((prediction_sum(&report.sentiment) - 1.0).abs() <= 1e-3);
        prop_assert_eq!(reconstruct(&report.emotion.annotations), text.clone());
        prop_assert_eq!(reconstruct(&report.sentiment.annotations), text);
    }

    #[test]
    fn prop_classification_is_idempotent(text in chat_message()) {
        let engine = AffectEngine::new();
        prop_assert_eq!(engine.analyze(&text).unwrap(), engine.analyze(&text).unwrap());
    }
}

#[test]
fn test_negation_inverts_primary_emotion() {
    let analyzer = EmotionAnalyzer::new();
    let happy = analyzer.classify("I am happy").unwrap();
    let unhappy = analyzer.classify("I am not happy").unwrap();

    assert_eq!(happy.primary().map(|(label, _)| label), Some("joy"));
    assert_eq!(unhappy.primary().map(|(label, _)| label), Some("sadness"));
}

#[test]
fn test_intensifier_ordering() {
    let analyzer = SentimentAnalyzer::new();
    let positive = |text: &str| analyzer.classify(text).unwrap().probability("Positive");

    assert!(positive("very good") > positive("good"));
    assert!(positive("good") > positive("slightly good"));
}

#[test]
fn test_contrast_clause_dominates() {
    let result = SentimentAnalyzer::new()
        .classify("The food was great but the service was terrible")
        .unwrap();
    assert!(result.probability("Negative") > result.probability("Positive"));
    assert_eq!(
        tagged_spans(&result),
        vec![
            ("great".to_string(), "Positive".to_string()),
            ("terrible".to_string(), "Negative".to_string()),
        ]
    );
}

#[test]
fn test_neutral_floor() {
    let result = SentimentAnalyzer::new().classify("The meeting is at 3pm").unwrap();
    assert!(result.probability("Neutral") >= 0.7);
    assert!(result.probability("Positive") < 0.2);
    assert!(result.probability("Negative") < 0.2);
}

#[test]
fn test_empty_input_is_canonical_neutral() {
    for text in ["", "   ", "\n\t"] {
        let emotion = EmotionAnalyzer::new().classify(text).unwrap();
        assert_eq!(emotion.predictions.len(), 1);
        assert_eq!(emotion.probability("neutral"), 1.0);
        assert_eq!(emotion.annotations.len(), 1);
        assert_eq!(emotion.annotations[0].text, text);
        assert!(emotion.annotations[0].label.is_none());

        let sentiment = SentimentAnalyzer::new().classify(text).unwrap();
        assert_eq!(sentiment.probability("Neutral"), 1.0);
        assert_eq!(sentiment.probability("Positive"), 0.0);
        assert_eq!(sentiment.probability("Negative"), 0.0);
        assert_eq!(sentiment.annotations.len(), 1);
        assert_eq!(sentiment.annotations[0].text, text);
    }
}

#[test]
fn test_non_string_input_is_rejected() {
    let emotion = EmotionAnalyzer::new();
    let sentiment = SentimentAnalyzer::new();

    for value in [json!(null), json!(17), json!(true), json!(["happy"]), json!({ "text": "happy" })] {
        assert!(matches!(emotion.classify_json(&value), Err(AffectError::InvalidInput(_))));
        assert!(matches!(sentiment.classify_json(&value), Err(AffectError::InvalidInput(_))));
    }

    let err = emotion.classify_json(&json!(null)).unwrap_err();
    assert!(err.to_string().contains("got null"));

    assert!(matches!(
        sentiment.classify_bytes(&[b'o', b'k', 0xfe]),
        Err(AffectError::InvalidInput(_))
    ));
    assert!(emotion.classify_bytes("I am happy".as_bytes()).is_ok());
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(AffectEngine::new());
    let expected: Vec<_> = sample_texts()
        .into_iter()
        .map(|text| engine.analyze(text).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                sample_texts()
                    .into_iter()
                    .map(|text| engine.analyze(text).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_sample_texts_keep_invariants() {
    let engine = AffectEngine::new();
    for text in sample_texts() {
        let report = engine.analyze(text).unwrap();
        assert!((prediction_sum(&report.emotion) - 1.0).abs() <= 1e-3, "{}", text);
        assert!((prediction_sum(&report.sentiment) - 1.0).abs() <= 1e-3, "{}", text);
        assert_eq!(reconstruct(&report.emotion.annotations), text);
        assert_eq!(reconstruct(&report.sentiment.annotations), text);
    }
}
