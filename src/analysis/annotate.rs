//! Annotation spans for UI highlighting
//!
//! Turns contributing hits into an ordered, gapless sequence of spans that
//! covers the whole input. Concatenating the `text` of every span gives back
//! the original input exactly.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::trace;

/// One contiguous piece of the input, optionally tagged with a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    pub text: String,

    /// Category label, `None` for plain text
    #[serde(rename = "type")]
    pub label: Option<String>,

    /// `#RRGGBB` highlight color, `None` for plain text
    pub color: Option<String>,
}

impl AnnotationSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
            color: None,
        }
    }

    pub fn tagged(text: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
            color: Some(color.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.label.is_none()
    }
}

/// A contributing hit to be highlighted
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Full display range (may include a leading negation)
    pub range: Range<usize>,
    /// Range of the lexicon word itself, used when the full range overlaps
    pub core: Range<usize>,
    pub label: String,
    pub color: String,
}

/// Collects highlights and renders them over the text
#[derive(Debug, Default)]
pub struct Annotator {
    highlights: Vec<Highlight>,
}

impl Annotator {
    pub fn new() -> Self {
        Self {
            highlights: Vec::new(),
        }
    }

    /// Add a highlight to be rendered
    pub fn add(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
    }

    /// Render the highlights over `text`
    ///
    /// Highlights are taken in start order. One that overlaps text already
    /// emitted falls back to its core range; if that overlaps too, or a range
    /// does not fall on character boundaries of `text`, it is skipped.
    pub fn render(mut self, text: &str) -> Vec<AnnotationSpan> {
        if text.is_empty() {
            return vec![AnnotationSpan::plain(text)];
        }

        self.highlights
            .sort_by(|a, b| a.range.start.cmp(&b.range.start).then(a.core.start.cmp(&b.core.start)));

        let mut spans = Vec::new();
        let mut last_end = 0;

        for highlight in self.highlights {
            let range = if highlight.range.start >= last_end {
                highlight.range
            } else if highlight.core.start >= last_end {
                highlight.core
            } else {
                trace!(range = ?highlight.range, last_end, "Skipping overlapped highlight");
                continue;
            };

            if !Self::fits(text, &range) {
                trace!(?range, "Skipping highlight outside the text");
                continue;
            }

            // Add any gap before this span
            if range.start > last_end {
                spans.push(AnnotationSpan::plain(&text[last_end..range.start]));
            }

            spans.push(AnnotationSpan::tagged(
                &text[range.clone()],
                highlight.label,
                highlight.color,
            ));
            last_end = range.end;
        }

        // Add any remaining text
        if last_end < text.len() {
            spans.push(AnnotationSpan::plain(&text[last_end..]));
        }

        spans
    }

    fn fits(text: &str, range: &Range<usize>) -> bool {
        range.start < range.end
            && range.end <= text.len()
            && text.is_char_boundary(range.start)
            && text.is_char_boundary(range.end)
    }
}

/// Reassemble the original text from its spans
pub fn reconstruct(spans: &[AnnotationSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(range: Range<usize>, core: Range<usize>, label: &str) -> Highlight {
        Highlight {
            range,
            core,
            label: label.to_string(),
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_gapless_coverage() {
        let text = "I am not happy today";
        let mut annotator = Annotator::new();
        annotator.add(highlight(5..14, 9..14, "sadness"));
        let spans = annotator.render(text);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], AnnotationSpan::plain("I am "));
        assert_eq!(spans[1].text, "not happy");
        assert_eq!(spans[1].label.as_deref(), Some("sadness"));
        assert!(spans[2].is_plain());
        assert_eq!(reconstruct(&spans), text);
    }

    #[test]
    fn test_no_highlights_single_span() {
        let spans = Annotator::new().render("The meeting is at 3pm");
        assert_eq!(spans, vec![AnnotationSpan::plain("The meeting is at 3pm")]);
    }

    #[test]
    fn test_empty_text_single_span() {
        assert_eq!(Annotator::new().render(""), vec![AnnotationSpan::plain("")]);
    }

    #[test]
    fn test_overlap_falls_back_to_core() {
        // "not happy or sad" with both hits negated by the same "not"
        let text = "not happy or sad";
        let mut annotator = Annotator::new();
        annotator.add(highlight(0..9, 4..9, "sadness"));
        annotator.add(highlight(0..16, 13..16, "joy"));
        let spans = annotator.render(text);

        let tagged: Vec<_> = spans.iter().filter(|s| !s.is_plain()).map(|s| s.text.as_str()).collect();
        assert_eq!(tagged, vec!["not happy", "sad"]);
        assert_eq!(reconstruct(&spans), text);
    }

    #[test]
    fn test_out_of_bounds_highlight_is_skipped() {
        let text = "short";
        let mut annotator = Annotator::new();
        annotator.add(highlight(2..40, 2..40, "joy"));
        let spans = annotator.render(text);
        assert_eq!(spans, vec![AnnotationSpan::plain("short")]);
    }

    #[test]
    fn test_serializes_type_field() {
        let span = AnnotationSpan::tagged("happy", "joy", "#FFC107");
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["type"], "joy");
        assert_eq!(json["color"], "#FFC107");

        let plain = serde_json::to_value(AnnotationSpan::plain("x")).unwrap();
        assert!(plain["type"].is_null());
    }
}
