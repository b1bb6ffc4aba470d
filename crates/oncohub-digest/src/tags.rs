//! Subject-tag inference for article cards.

use oncohub_search::models::{Article, BASE_CANCER_TYPE, CANCER_TYPES};

/// Catalogue labels (other than the base label) mentioned in an article's
/// title or abstract, in catalogue order. Case-insensitive substring match.
pub fn infer_cancer_types(article: &Article) -> Vec<&'static str> {
    let title = article.title.to_lowercase();
    let abstract_text = article.abstract_text.to_lowercase();

    CANCER_TYPES
        .iter()
        .filter(|label| **label != BASE_CANCER_TYPE)
        .filter(|label| {
            let needle = label.to_lowercase();
            title.contains(&needle) || abstract_text.contains(&needle)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, abstract_text: &str) -> Article {
        Article {
            id: "1".to_string(),
            title: title.to_string(),
            authors: vec![],
            abstract_text: abstract_text.to_string(),
            publish_date: String::new(),
            journal: String::new(),
            doi: None,
            keywords: vec![],
        }
    }

    #[test]
    fn test_infers_from_title_and_abstract() {
        let a = article(
            "Osimertinib in lung cancer",
            "We compare outcomes against melanoma cohorts.",
        );
        assert_eq!(infer_cancer_types(&a), vec!["Lung Cancer", "Melanoma"]);
    }

    #[test]
    fn test_base_label_never_tagged() {
        let a = article("Advances in cancer therapy", "A broad cancer review.");
        assert!(infer_cancer_types(&a).is_empty());
    }
}
