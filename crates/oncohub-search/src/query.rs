//! PubMed advanced-query construction.
//!
//! A search term is up to three parenthesised groups joined with AND:
//! the free-text query, an OR-group of subject labels restricted to
//! Title/Abstract, and an OR-group of publication-type labels.

use crate::models::Filters;

/// Build the esearch `term` parameter from free text plus filter groups.
/// Empty free text and empty label sets contribute nothing.
pub fn build_term(query: &str, filters: &Filters) -> String {
    let mut groups: Vec<String> = Vec::new();

    let trimmed = query.trim();
    if !trimmed.is_empty() {
        groups.push(format!("({})", trimmed));
    }

    if !filters.cancer_types.is_empty() {
        let or_group = filters
            .cancer_types
            .iter()
            .map(|t| format!("\"{}\"[Title/Abstract]", t))
            .collect::<Vec<_>>()
            .join(" OR ");
        groups.push(format!("({})", or_group));
    }

    if !filters.article_types.is_empty() {
        let or_group = filters
            .article_types
            .iter()
            .map(|t| format!("\"{}\"[Publication Type]", t))
            .collect::<Vec<_>>()
            .join(" OR ");
        groups.push(format!("({})", or_group));
    }

    groups.join(" AND ")
}

/// 0-based record offset for a 1-based page number.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PAGE_SIZE;

    #[test]
    fn test_build_term_all_groups() {
        let filters = Filters {
            cancer_types: vec!["Cancer".to_string(), "Lung Cancer".to_string()],
            article_types: vec!["Clinical Trial".to_string()],
        };
        let term = build_term("lung", &filters);
        assert_eq!(
            term,
            "(lung) AND (\"Cancer\"[Title/Abstract] OR \"Lung Cancer\"[Title/Abstract]) \
             AND (\"Clinical Trial\"[Publication Type])"
        );
    }

    #[test]
    fn test_build_term_skips_blank_query() {
        let filters = Filters::default();
        assert_eq!(build_term("   ", &filters), "(\"Cancer\"[Title/Abstract])");
    }

    #[test]
    fn test_build_term_no_groups() {
        let filters = Filters {
            cancer_types: vec![],
            article_types: vec![],
        };
        assert_eq!(build_term("", &filters), "");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, PAGE_SIZE), 0);
        assert_eq!(page_offset(2, PAGE_SIZE), 9);
        assert_eq!(page_offset(0, PAGE_SIZE), 0);
    }
}
