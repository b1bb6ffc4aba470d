//! Sentence scoring heuristics.

/// Terms whose presence marks a sentence as carrying the abstract's
/// substance. Each term contributes at most once per sentence.
pub const DOMAIN_KEYWORDS: [&str; 18] = [
    "significant", "conclusion", "demonstrate", "results", "found", "study",
    "important", "novel", "discovery", "breakthrough", "treatment", "therapy",
    "survival", "outcome", "efficacy", "clinical", "trial", "analysis",
];

/// Score a sentence by position, length, and domain-keyword presence.
///
/// First and last sentences of an abstract tend to carry the framing and
/// the conclusion, so they get a positional bonus; very short and very
/// long sentences are penalised by withholding the length bonus.
pub fn score_sentence(sentence: &str, position: usize, total: usize) -> f64 {
    let mut score = 0.0;

    if position == 0 {
        score += 0.3;
    }
    if total > 0 && position == total - 1 {
        score += 0.2;
    }

    let words = sentence.split_whitespace().count();
    if words > 5 && words < 25 {
        score += 0.2;
    }

    let lower = sentence.to_lowercase();
    score += DOMAIN_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count() as f64
        * 0.1;

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_bonuses() {
        assert!((score_sentence("Tiny one.", 0, 3) - 0.3).abs() < 1e-9);
        assert!((score_sentence("Tiny one.", 2, 3) - 0.2).abs() < 1e-9);
        assert!((score_sentence("Tiny one.", 1, 3)).abs() < 1e-9);
    }

    #[test]
    fn test_single_sentence_gets_both_bonuses() {
        assert!((score_sentence("Tiny one.", 0, 1) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_length_bonus_bounds_are_strict() {
        let five = "one two three four five.";
        let six = "one two three four five six.";
        assert!(score_sentence(five, 1, 3).abs() < 1e-9);
        assert!((score_sentence(six, 1, 3) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive_substring() {
        // "significantly" contains "significant"; "Results" matches lowercase.
        let s = "Results improved significantly.";
        assert!((score_sentence(s, 1, 3) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_counted_once_per_sentence() {
        let s = "trial after trial after trial.";
        assert!((score_sentence(s, 1, 3) - 0.1).abs() < 1e-9);
    }
}
