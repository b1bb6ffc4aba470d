//! Sentence splitting for extractive summarisation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Terminator-inclusive span: everything up to and including a run of
    // sentence-ending punctuation. Text after the final terminator is dropped.
    static ref SENTENCE_RE: Regex = Regex::new(r"[^.!?]+[.!?]+").unwrap();
}

/// A sentence tagged with its position in the source text. Selection and
/// re-ordering go through the index so duplicate text stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

/// Split text into trimmed, terminator-inclusive sentences.
/// Text without any terminator yields no sentences.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    SENTENCE_RE
        .find_iter(text)
        .enumerate()
        .map(|(index, m)| Sentence {
            index,
            text: m.as_str().trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let s = split_sentences("First one. Second one! Third one?");
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].text, "First one.");
        assert_eq!(s[1].text, "Second one!");
        assert_eq!(s[2].text, "Third one?");
        assert_eq!(s[2].index, 2);
    }

    #[test]
    fn test_split_keeps_terminator_runs() {
        let s = split_sentences("Really?! Yes.");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].text, "Really?!");
    }

    #[test]
    fn test_no_terminator_yields_nothing() {
        assert!(split_sentences("no terminator here").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_trailing_fragment_dropped() {
        let s = split_sentences("Complete sentence. trailing fragment");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "Complete sentence.");
    }
}
