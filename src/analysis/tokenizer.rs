//! Sentence segmentation and position-tracked tokenization
//!
//! A single pre-pass over the input produces every sentence and term with
//! its byte offsets, so later stages never rescan the text to find where a
//! word came from.

use super::utils::CommonPatterns;
use serde::Serialize;
use std::ops::Range;

/// Atomic token with its exact position in the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// Text exactly as it appears in the input
    pub text: String,
    /// Lowercase form with typographic apostrophes straightened, used for lookups
    pub normalized: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Term {
    pub fn new(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            normalized: text.to_lowercase().replace('’', "'"),
            start,
            end: start + text.len(),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True if the term is written entirely in capitals and has at least `min_len` letters
    pub fn is_shouted(&self, min_len: usize) -> bool {
        let mut letters = 0;
        for c in self.text.chars().filter(|c| c.is_alphabetic()) {
            if !c.is_uppercase() {
                return false;
            }
            letters += 1;
        }
        letters >= min_len
    }
}

/// Ordered terms of one sentence plus its own offset range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub index: usize,
    pub range: Range<usize>,
    pub terms: Vec<Term>,
}

/// Split text into sentences of position-tracked terms
///
/// Sentences end at a run of `.`, `!` or `?`. Sentences without any word
/// term (stray punctuation, emoticons) are dropped; indices stay dense.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for mat in CommonPatterns::sentence().find_iter(text) {
        let offset = mat.start();
        let terms: Vec<Term> = CommonPatterns::word()
            .find_iter(mat.as_str())
            .map(|word| Term::new(word.as_str(), offset + word.start()))
            .collect();

        if terms.is_empty() {
            continue;
        }

        sentences.push(Sentence {
            index: sentences.len(),
            range: mat.range(),
            terms,
        });
    }

    sentences
}

/// Every term of the text in order, ignoring sentence boundaries
pub fn terms(text: &str) -> Vec<Term> {
    CommonPatterns::word()
        .find_iter(text)
        .map(|word| Term::new(word.as_str(), word.start()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_match_original_text() {
        let text = "I am  VERY happy. Aren’t you?";
        for sentence in segment(text) {
            for term in &sentence.terms {
                assert_eq!(&text[term.range()], term.text);
            }
        }
    }

    #[test]
    fn test_sentence_split() {
        let sentences = segment("Good morning. How are you?! Fine");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1].terms[0].text, "How");
        assert_eq!(sentences[2].index, 2);
    }

    #[test]
    fn test_punctuation_only_sentences_dropped() {
        let sentences = segment("Wow... ?! :) great");
        let words: Vec<_> = sentences
            .iter()
            .flat_map(|s| s.terms.iter().map(|t| t.text.as_str()))
            .collect();
        assert_eq!(words, vec!["Wow", "great"]);
        assert_eq!(sentences.last().unwrap().index, sentences.len() - 1);
    }

    #[test]
    fn test_normalized_form() {
        let term = Term::new("Can’t", 0);
        assert_eq!(term.normalized, "can't");
        assert_eq!(term.end, "Can’t".len());
    }

    #[test]
    fn test_shouted_terms() {
        assert!(Term::new("HAPPY", 0).is_shouted(2));
        assert!(!Term::new("I", 0).is_shouted(2));
        assert!(!Term::new("Happy", 0).is_shouted(2));
        assert!(!Term::new("3PM", 0).is_shouted(3));
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t").is_empty());
        assert!(terms("").is_empty());
    }
}
