//! oncohub-digest — Heuristic extractive summarisation of abstracts,
//! plus subject-tag inference for article cards.

pub mod scorer;
pub mod sentence;
pub mod tags;

pub use scorer::score_sentence;
pub use sentence::{split_sentences, Sentence};
pub use tags::infer_cancer_types;

/// Produce a summary of at most `sentence_count` sentences from `text`,
/// selected by heuristic score and re-ordered to their original positions.
///
/// Input with `sentence_count` or fewer sentences (including text with no
/// terminator at all) is returned unchanged. Pure function of its inputs.
pub fn extract_summary(text: &str, sentence_count: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let sentences = split_sentences(text);
    if sentences.len() <= sentence_count {
        return text.to_string();
    }

    let total = sentences.len();
    let mut scored: Vec<(Sentence, f64)> = sentences
        .into_iter()
        .map(|s| {
            let score = score_sentence(&s.text, s.index, total);
            (s, score)
        })
        .collect();

    // Top N by score, ties broken by original position (earlier wins).
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.index.cmp(&b.0.index))
    });
    scored.truncate(sentence_count);

    // Back to source order. Selection is tracked by index, never by text,
    // so duplicate sentences cannot collapse onto the first occurrence.
    scored.sort_by_key(|(s, _)| s.index);

    scored
        .into_iter()
        .map(|(s, _)| s.text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABSTRACT: &str = "Tumors shrank significantly. Patients reported side effects. \
                            The trial enrolled 200 subjects. Results were promising for survival.";

    #[test]
    fn test_short_input_returned_unchanged() {
        let text = "One sentence. Two sentences.";
        assert_eq!(extract_summary(text, 3), text);
        assert_eq!(extract_summary(text, 2), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_summary("", 2), "");
    }

    #[test]
    fn test_no_terminators_returned_unchanged() {
        let text = "an abstract fragment with no sentence terminator";
        assert_eq!(extract_summary(text, 2), text);
    }

    #[test]
    fn test_selects_first_and_last_for_oncology_abstract() {
        // First sentence: +0.3 position, "significant" keyword hit.
        // Last sentence: +0.2 position, "results" and "survival" hits.
        let summary = extract_summary(ABSTRACT, 2);
        assert_eq!(
            summary,
            "Tumors shrank significantly. Results were promising for survival."
        );
    }

    #[test]
    fn test_summary_sentences_are_substrings_in_order() {
        let summary = extract_summary(ABSTRACT, 2);
        let mut cursor = 0;
        for sentence in summary.split_inclusive(". ") {
            let sentence = sentence.trim_end();
            let pos = ABSTRACT[cursor..]
                .find(sentence)
                .expect("summary sentence must appear in source after the previous one");
            cursor += pos + sentence.len();
        }
    }

    #[test]
    fn test_tie_break_prefers_earlier_sentence() {
        // The two middle sentences score identically (7 words, no keywords);
        // the earlier one must win the third slot.
        let text = "Alpha beta gamma delta epsilon zeta eta. \
                    Theta iota kappa lambda mu nu xi. \
                    Omicron pi rho sigma tau upsilon phi. \
                    Chi psi omega aleph bet gimel dalet.";
        let summary = extract_summary(text, 3);
        assert_eq!(
            summary,
            "Alpha beta gamma delta epsilon zeta eta. \
             Theta iota kappa lambda mu nu xi. \
             Chi psi omega aleph bet gimel dalet."
        );
    }

    #[test]
    fn test_duplicate_sentences_do_not_collapse() {
        // The duplicated high-scoring sentence appears at positions 0 and 2;
        // index-tagged selection must keep them distinct.
        let text = "The study found significant survival results in the trial cohort. \
                    Filler filler filler. \
                    The study found significant survival results in the trial cohort. \
                    More filler here today.";
        let summary = extract_summary(text, 2);
        assert_eq!(
            summary,
            "The study found significant survival results in the trial cohort. \
             The study found significant survival results in the trial cohort."
        );
    }

    #[test]
    fn test_exactly_n_sentences_returned() {
        let summary = extract_summary(ABSTRACT, 3);
        assert_eq!(summary.matches('.').count(), 3);
    }
}
