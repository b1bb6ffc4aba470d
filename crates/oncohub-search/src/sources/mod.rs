//! Article source clients.

pub mod pubmed;

use async_trait::async_trait;

use crate::models::{Filters, SearchPage};

/// Common interface for article search backends. The feed session is
/// generic over this so tests can substitute a canned source.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch one page (1-based) of articles matching a query and filter set.
    async fn search(
        &self,
        query: &str,
        page: usize,
        filters: &Filters,
    ) -> anyhow::Result<SearchPage>;
}
