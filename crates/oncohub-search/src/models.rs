//! Data models for article search.

use serde::{Deserialize, Serialize};

/// Articles fetched per page request.
pub const PAGE_SIZE: usize = 9;

/// The subject label every search carries; see `Filters::ensure_base`.
pub const BASE_CANCER_TYPE: &str = "Cancer";

/// Subject labels offered by the filter panel. The base label comes first.
pub const CANCER_TYPES: [&str; 11] = [
    "Cancer",
    "Breast Cancer",
    "Lung Cancer",
    "Prostate Cancer",
    "Colorectal Cancer",
    "Melanoma",
    "Leukemia",
    "Lymphoma",
    "Brain Cancer",
    "Ovarian Cancer",
    "Pancreatic Cancer",
];

/// Publication-type labels offered by the filter panel.
pub const ARTICLE_TYPES: [&str; 6] = [
    "Clinical Trial",
    "Review",
    "Case Report",
    "Research Article",
    "Meta-Analysis",
    "Systematic Review",
];

/// A research article as mapped from an esummary record.
/// Immutable once fetched; `publish_date` and `doi` are passed through
/// from the API unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub abstract_text: String,
    pub publish_date: String,
    pub journal: String,
    pub doi: Option<String>,
    pub keywords: Vec<String>,
}

/// User-selected label sets narrowing the search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub cancer_types: Vec<String>,
    pub article_types: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            cancer_types: vec![BASE_CANCER_TYPE.to_string()],
            article_types: vec![],
        }
    }
}

impl Filters {
    /// Re-inserts the base subject label at the front when missing.
    /// Invariant: the base label is always present.
    pub fn ensure_base(&mut self) {
        if !self.cancer_types.iter().any(|t| t == BASE_CANCER_TYPE) {
            self.cancer_types.insert(0, BASE_CANCER_TYPE.to_string());
        }
    }

    /// Number of selected labels beyond the always-on base label.
    pub fn active_count(&self) -> usize {
        (self.cancer_types.len() + self.article_types.len()).saturating_sub(1)
    }
}

/// One page of search results plus the total reported by the search step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub articles: Vec<Article>,
    pub total: usize,
}
