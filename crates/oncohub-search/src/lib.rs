//! oncohub-search — PubMed E-utilities integration: article model, filter
//! model, advanced-query construction, and the two-step search client.

pub mod models;
pub mod query;
pub mod sources;

pub use models::{Article, Filters, SearchPage, ARTICLE_TYPES, BASE_CANCER_TYPE, CANCER_TYPES, PAGE_SIZE};
pub use sources::ArticleSource;
