//! Text-level signals used by the global heuristics
//!
//! Counted once per call over the whole input, independent of sentence
//! boundaries.

use super::tokenizer::Term;
use super::utils::CommonPatterns;
use crate::settings::CapsSettings;

/// Punctuation, capitalization and emoticon counts for a text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextSignals {
    pub question_marks: usize,
    pub exclamation_marks: usize,
    pub shouted_words: usize,
    pub word_count: usize,
    pub positive_emoticons: usize,
    pub negative_emoticons: usize,
}

impl TextSignals {
    /// Collect signals from the raw text and its terms
    pub fn collect(text: &str, terms: &[Term], caps: &CapsSettings) -> Self {
        Self {
            question_marks: text.matches('?').count(),
            exclamation_marks: text.matches('!').count(),
            shouted_words: terms.iter().filter(|t| t.is_shouted(caps.min_word_len)).count(),
            word_count: terms.len(),
            positive_emoticons: CommonPatterns::positive_emoticon().find_iter(text).count(),
            negative_emoticons: CommonPatterns::negative_emoticon().find_iter(text).count(),
        }
    }

    /// True when enough words are written in capitals to count as shouting
    pub fn is_shouting(&self, caps: &CapsSettings) -> bool {
        if self.shouted_words == 0 || self.word_count == 0 {
            return false;
        }
        let ratio = self.shouted_words as f64 / self.word_count as f64;
        self.shouted_words > caps.min_count || ratio > caps.min_ratio
    }

    /// Net emoticon count: positive minus negative
    pub fn emoticon_balance(&self) -> i64 {
        self.positive_emoticons as i64 - self.negative_emoticons as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::terms;

    fn signals(text: &str) -> TextSignals {
        TextSignals::collect(text, &terms(text), &CapsSettings::default())
    }

    #[test]
    fn test_punctuation_counts() {
        let s = signals("Really?? Yes!!!");
        assert_eq!(s.question_marks, 2);
        assert_eq!(s.exclamation_marks, 3);
    }

    #[test]
    fn test_shouting_by_count() {
        let s = signals("this is SO VERY annoying and long and boring text here");
        assert_eq!(s.shouted_words, 2);
        assert!(s.is_shouting(&CapsSettings::default()));
    }

    #[test]
    fn test_shouting_by_ratio() {
        let s = signals("I am HAPPY");
        assert_eq!(s.shouted_words, 1);
        assert!(s.is_shouting(&CapsSettings::default()));

        let s = signals("the weather in the city of NYC is mild today");
        assert!(!s.is_shouting(&CapsSettings::default()));
    }

    #[test]
    fn test_emoticon_balance() {
        let s = signals("ok :) :) but :(");
        assert_eq!(s.positive_emoticons, 2);
        assert_eq!(s.negative_emoticons, 1);
        assert_eq!(s.emoticon_balance(), 1);
    }

    #[test]
    fn test_empty_text() {
        let s = signals("");
        assert_eq!(s, TextSignals::default());
        assert!(!s.is_shouting(&CapsSettings::default()));
    }
}
