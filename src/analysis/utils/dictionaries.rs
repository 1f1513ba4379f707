//! Dictionary-based word lists for emotion and sentiment analysis
//!
//! Every table is built once on first use and is read-only afterwards, so
//! analyzers on any thread share them by reference. Lookups expect the
//! lowercase, straight-apostrophe form produced by the tokenizer.

use crate::analysis::categories::Emotion;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Emotion lexicon: word → (category, base weight)
pub struct EmotionLexicon;

impl EmotionLexicon {
    /// Look up a normalized word
    pub fn lookup(word: &str) -> Option<(Emotion, f64)> {
        Self::table().get(word).copied()
    }

    fn table() -> &'static HashMap<&'static str, (Emotion, f64)> {
        static TABLE: Lazy<HashMap<&'static str, (Emotion, f64)>> = Lazy::new(|| {
            let lists: [(Emotion, &[(&str, f64)]); 8] = [
                (
                    Emotion::Joy,
                    &[
                        ("happy", 1.0),
                        ("happiness", 1.0),
                        ("glad", 1.0),
                        ("joy", 1.0),
                        ("joyful", 1.0),
                        ("delighted", 1.0),
                        ("cheerful", 1.0),
                        ("excited", 1.0),
                        ("exciting", 1.0),
                        ("thrilled", 1.5),
                        ("ecstatic", 1.5),
                        ("elated", 1.5),
                        ("pleased", 1.0),
                        ("content", 0.8),
                        ("wonderful", 1.0),
                        ("great", 0.8),
                        ("amazing", 1.0),
                        ("awesome", 1.0),
                        ("fantastic", 1.0),
                        ("excellent", 1.0),
                        ("good", 0.6),
                        ("fun", 0.8),
                        ("enjoy", 1.0),
                        ("enjoyed", 1.0),
                        ("enjoying", 1.0),
                        ("smile", 0.8),
                        ("smiling", 0.8),
                        ("laugh", 0.8),
                        ("laughing", 0.8),
                        ("celebrate", 1.0),
                        ("yay", 1.0),
                        ("hooray", 1.0),
                        ("grateful", 1.0),
                        ("thankful", 1.0),
                        ("blessed", 1.0),
                        ("proud", 1.0),
                        ("relieved", 0.8),
                    ],
                ),
                (
                    Emotion::Sadness,
                    &[
                        ("sad", 1.0),
                        ("sadness", 1.0),
                        ("unhappy", 1.0),
                        ("depressed", 1.5),
                        ("depressing", 1.0),
                        ("miserable", 1.5),
                        ("heartbroken", 1.5),
                        ("devastated", 1.5),
                        ("lonely", 1.0),
                        ("cry", 1.0),
                        ("crying", 1.0),
                        ("cried", 1.0),
                        ("tears", 1.0),
                        ("grief", 1.5),
                        ("grieving", 1.5),
                        ("sorrow", 1.0),
                        ("gloomy", 1.0),
                        ("disappointed", 1.0),
                        ("disappointing", 1.0),
                        ("hopeless", 1.0),
                        ("hurt", 1.0),
                        ("upset", 1.0),
                        ("regret", 1.0),
                        ("miss", 0.8),
                        ("missed", 0.8),
                        ("sorry", 0.6),
                    ],
                ),
                (
                    Emotion::Anger,
                    &[
                        ("angry", 1.0),
                        ("anger", 1.0),
                        ("mad", 1.0),
                        ("furious", 1.5),
                        ("rage", 1.5),
                        ("outraged", 1.5),
                        ("annoyed", 1.0),
                        ("annoying", 1.0),
                        ("irritated", 1.0),
                        ("frustrated", 1.0),
                        ("frustrating", 1.0),
                        ("hate", 1.0),
                        ("hated", 1.0),
                        ("hateful", 1.0),
                        ("livid", 1.5),
                        ("pissed", 1.0),
                        ("resent", 1.0),
                        ("resentful", 1.0),
                        ("hostile", 1.0),
                        ("infuriating", 1.5),
                    ],
                ),
                (
                    Emotion::Fear,
                    &[
                        ("afraid", 1.0),
                        ("scared", 1.0),
                        ("fear", 1.0),
                        ("fearful", 1.0),
                        ("frightened", 1.0),
                        ("terrified", 1.5),
                        ("terrifying", 1.5),
                        ("anxious", 1.0),
                        ("anxiety", 1.0),
                        ("nervous", 1.0),
                        ("worried", 1.0),
                        ("worry", 1.0),
                        ("panic", 1.0),
                        ("panicked", 1.0),
                        ("dread", 1.0),
                        ("horrified", 1.5),
                        ("nightmare", 1.0),
                        ("uneasy", 0.8),
                        ("tense", 0.8),
                        ("threatened", 1.0),
                    ],
                ),
                (
                    Emotion::Surprise,
                    &[
                        ("surprised", 1.0),
                        ("surprise", 1.0),
                        ("surprising", 1.0),
                        ("shocked", 1.0),
                        ("shocking", 1.0),
                        ("astonished", 1.0),
                        ("amazed", 1.0),
                        ("stunned", 1.0),
                        ("unexpected", 0.8),
                        ("wow", 1.0),
                        ("whoa", 1.0),
                        ("unbelievable", 1.0),
                        ("startled", 1.0),
                        ("speechless", 1.0),
                    ],
                ),
                (
                    Emotion::Love,
                    &[
                        ("love", 1.0),
                        ("loved", 1.0),
                        ("loving", 1.0),
                        ("lovely", 0.8),
                        ("adore", 1.5),
                        ("adored", 1.5),
                        ("affection", 1.0),
                        ("caring", 0.8),
                        ("cherish", 1.0),
                        ("darling", 1.0),
                        ("sweetheart", 1.0),
                        ("romantic", 1.0),
                        ("fond", 0.8),
                        ("beloved", 1.0),
                        ("passion", 1.0),
                        ("passionate", 1.0),
                    ],
                ),
                (
                    Emotion::Disgust,
                    &[
                        ("disgust", 1.0),
                        ("disgusted", 1.0),
                        ("disgusting", 1.5),
                        ("gross", 1.0),
                        ("nasty", 1.0),
                        ("revolting", 1.5),
                        ("repulsive", 1.5),
                        ("sickening", 1.5),
                        ("repugnant", 1.5),
                        ("vile", 1.0),
                        ("filthy", 1.0),
                        ("awful", 1.0),
                        ("yuck", 1.0),
                        ("ew", 1.0),
                        ("eww", 1.0),
                    ],
                ),
                (
                    Emotion::Confusion,
                    &[
                        ("confused", 1.0),
                        ("confusing", 1.0),
                        ("puzzled", 1.0),
                        ("baffled", 1.0),
                        ("perplexed", 1.0),
                        ("bewildered", 1.0),
                        ("unsure", 0.8),
                        ("unclear", 0.8),
                        ("uncertain", 0.8),
                        ("wondering", 0.6),
                        ("huh", 0.8),
                    ],
                ),
            ];

            let mut table = HashMap::new();
            for (emotion, words) in lists {
                for &(word, weight) in words {
                    table.entry(word).or_insert((emotion, weight));
                }
            }
            table
        });
        &TABLE
    }
}

/// Sentiment lexicon: word → signed score in [-1, 1]
pub struct SentimentLexicon;

impl SentimentLexicon {
    /// Look up the signed score of a normalized word
    pub fn score(word: &str) -> Option<f64> {
        Self::table().get(word).copied()
    }

    /// True if the word carries positive sentiment
    pub fn is_positive(word: &str) -> bool {
        Self::score(word).is_some_and(|s| s > 0.0)
    }

    /// True if the word carries negative sentiment
    pub fn is_negative(word: &str) -> bool {
        Self::score(word).is_some_and(|s| s < 0.0)
    }

    fn table() -> &'static HashMap<&'static str, f64> {
        static TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
            let positive: &[(&str, f64)] = &[
                ("good", 0.6),
                ("great", 0.8),
                ("excellent", 0.9),
                ("amazing", 0.9),
                ("awesome", 0.8),
                ("fantastic", 0.9),
                ("wonderful", 0.9),
                ("outstanding", 0.9),
                ("superb", 0.9),
                ("perfect", 0.9),
                ("brilliant", 0.8),
                ("incredible", 0.8),
                ("best", 0.9),
                ("better", 0.5),
                ("love", 0.8),
                ("loved", 0.8),
                ("lovely", 0.7),
                ("enjoy", 0.6),
                ("enjoyed", 0.6),
                ("happy", 0.7),
                ("glad", 0.6),
                ("pleased", 0.6),
                ("delighted", 0.8),
                ("excited", 0.7),
                ("grateful", 0.7),
                ("nice", 0.5),
                ("fine", 0.3),
                ("decent", 0.4),
                ("helpful", 0.6),
                ("friendly", 0.6),
                ("beautiful", 0.7),
                ("impressive", 0.7),
                ("delicious", 0.8),
                ("pleasant", 0.6),
                ("recommend", 0.6),
                ("satisfied", 0.6),
                ("fun", 0.6),
                ("easy", 0.4),
                ("clean", 0.4),
                ("comfortable", 0.5),
                ("cool", 0.5),
                ("positive", 0.5),
                ("success", 0.6),
                ("successful", 0.6),
                ("win", 0.5),
                ("thanks", 0.4),
                ("thank", 0.4),
                ("favorite", 0.7),
                ("welcome", 0.4),
                ("smooth", 0.4),
                ("reliable", 0.6),
            ];
            let negative: &[(&str, f64)] = &[
                ("bad", -0.6),
                ("terrible", -0.8),
                ("awful", -0.8),
                ("horrible", -0.9),
                ("worst", -0.9),
                ("worse", -0.6),
                ("poor", -0.6),
                ("hate", -0.8),
                ("hated", -0.8),
                ("disappointing", -0.7),
                ("disappointed", -0.7),
                ("disappointment", -0.7),
                ("sad", -0.6),
                ("unhappy", -0.7),
                ("upset", -0.6),
                ("angry", -0.7),
                ("annoying", -0.6),
                ("annoyed", -0.6),
                ("frustrating", -0.7),
                ("frustrated", -0.7),
                ("broken", -0.6),
                ("useless", -0.7),
                ("boring", -0.5),
                ("slow", -0.4),
                ("rude", -0.7),
                ("dirty", -0.6),
                ("ugly", -0.6),
                ("wrong", -0.5),
                ("fail", -0.6),
                ("failed", -0.6),
                ("failure", -0.7),
                ("problem", -0.4),
                ("problems", -0.4),
                ("issue", -0.3),
                ("issues", -0.3),
                ("difficult", -0.4),
                ("pain", -0.6),
                ("painful", -0.7),
                ("mediocre", -0.4),
                ("overpriced", -0.5),
                ("expensive", -0.3),
                ("disgusting", -0.9),
                ("pathetic", -0.8),
                ("waste", -0.6),
                ("unfortunately", -0.4),
                ("sucks", -0.7),
                ("crap", -0.7),
                ("lame", -0.5),
                ("negative", -0.5),
                ("scared", -0.5),
                ("afraid", -0.5),
                ("worried", -0.5),
                ("sorry", -0.3),
            ];

            positive.iter().chain(negative.iter()).copied().collect()
        });
        &TABLE
    }
}

/// Negation, intensifier and contrast dictionaries
pub struct ModifierDictionaries;

impl ModifierDictionaries {
    /// Negation terms
    pub fn negations() -> &'static HashSet<&'static str> {
        static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
            [
                "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
                "cannot", "can't", "cant", "don't", "dont", "doesn't", "doesnt", "didn't",
                "didnt", "isn't", "isnt", "wasn't", "wasnt", "aren't", "arent", "weren't",
                "werent", "won't", "wont", "wouldn't", "wouldnt", "shouldn't", "shouldnt",
                "couldn't", "couldnt", "haven't", "havent", "hasn't", "hasnt", "hadn't",
                "hadnt", "ain't", "without", "hardly", "barely", "scarcely",
            ]
            .iter()
            .copied()
            .collect()
        });
        &SET
    }

    /// Single-word intensifiers and their multipliers
    pub fn intensifiers() -> &'static HashMap<&'static str, f64> {
        static MAP: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
            [
                ("extremely", 2.0),
                ("utterly", 1.9),
                ("incredibly", 1.8),
                ("absolutely", 1.8),
                ("exceptionally", 1.8),
                ("totally", 1.7),
                ("completely", 1.7),
                ("super", 1.6),
                ("deeply", 1.6),
                ("most", 1.6),
                ("very", 1.5),
                ("really", 1.5),
                ("highly", 1.5),
                ("truly", 1.5),
                ("remarkably", 1.5),
                ("so", 1.4),
                ("especially", 1.4),
                ("too", 1.3),
                ("particularly", 1.3),
                ("quite", 1.2),
                ("pretty", 1.2),
                ("rather", 1.1),
                ("fairly", 1.1),
                ("somewhat", 0.7),
                ("kinda", 0.7),
                ("sorta", 0.7),
                ("mildly", 0.6),
                ("slightly", 0.5),
                ("marginally", 0.5),
            ]
            .iter()
            .copied()
            .collect()
        });
        &MAP
    }

    /// Two-word intensifier phrases, matched as a whole
    pub fn phrase_intensifiers() -> &'static [(&'static str, &'static str, f64)] {
        &[("a", "bit", 0.6), ("a", "little", 0.6)]
    }

    /// Contrast conjunctions
    pub fn contrasts() -> &'static HashSet<&'static str> {
        static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
            [
                "but",
                "however",
                "although",
                "though",
                "yet",
                "nevertheless",
                "nonetheless",
                "whereas",
                "despite",
            ]
            .iter()
            .copied()
            .collect()
        });
        &SET
    }
}
