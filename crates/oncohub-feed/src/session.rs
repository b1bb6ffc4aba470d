//! Feed session state machine.

use oncohub_search::models::{Article, Filters, SearchPage};
use oncohub_search::sources::ArticleSource;
use tracing::{debug, warn};

/// An explicit fetch request issued by the session. Carries the sequence
/// number it was issued under; a response only applies while that sequence
/// is still current.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub seq: u64,
    pub query: String,
    pub filters: Filters,
    pub page: usize,
}

/// Accumulated search feed over an [`ArticleSource`].
///
/// Query or filter changes reset the feed and bump the sequence number,
/// so a response to a superseded request is dropped instead of applying
/// stale data. Fetch failures keep already-loaded articles intact and
/// surface a recoverable error with a retry path.
pub struct FeedSession<S: ArticleSource> {
    source: S,
    query: String,
    filters: Filters,
    articles: Vec<Article>,
    total: usize,
    page: usize,
    has_more: bool,
    in_flight: bool,
    last_error: Option<String>,
    failed_page: Option<usize>,
    seq: u64,
}

impl<S: ArticleSource> FeedSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            query: String::new(),
            filters: Filters::default(),
            articles: vec![],
            total: 0,
            page: 0,
            has_more: true,
            in_flight: false,
            last_error: None,
            failed_page: None,
            seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Commit a new search query; resets the feed and issues page 1.
    pub fn set_query(&mut self, query: &str) -> PageRequest {
        self.query = query.trim().to_string();
        self.reset();
        self.issue(1)
    }

    /// Replace the filter selection; the base label invariant is enforced
    /// before the feed resets and page 1 is issued.
    pub fn set_filters(&mut self, mut filters: Filters) -> PageRequest {
        filters.ensure_base();
        self.filters = filters;
        self.reset();
        self.issue(1)
    }

    /// Re-issue page 1 for the current query and filters.
    pub fn refresh(&mut self) -> PageRequest {
        self.reset();
        self.issue(1)
    }

    /// The explicit "request next page" event. `None` when the feed is
    /// exhausted or a request is already outstanding.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        Some(self.issue(self.page + 1))
    }

    /// Re-issue the request that last failed, if any.
    pub fn retry(&mut self) -> Option<PageRequest> {
        let page = self.failed_page.take()?;
        Some(self.issue(page))
    }

    /// Apply a fetch outcome. Responses carrying a superseded sequence
    /// number are dropped; returns whether the outcome was applied.
    pub fn apply(&mut self, request: &PageRequest, result: anyhow::Result<SearchPage>) -> bool {
        if request.seq != self.seq {
            debug!(seq = request.seq, current = self.seq, "Dropping stale page response");
            return false;
        }
        self.in_flight = false;

        match result {
            Ok(page) => {
                if request.page == 1 {
                    self.articles = page.articles;
                } else {
                    self.articles.extend(page.articles);
                }
                self.total = page.total;
                self.page = request.page;
                // Continuation compares against the post-append count.
                self.has_more = self.articles.len() < self.total;
                self.last_error = None;
                self.failed_page = None;
            }
            Err(e) => {
                warn!(page = request.page, error = %e, "Page fetch failed; keeping loaded articles");
                self.last_error = Some(e.to_string());
                self.failed_page = Some(request.page);
            }
        }
        true
    }

    /// Perform the fetch for a previously issued request and apply it.
    pub async fn run(&mut self, request: PageRequest) {
        let result = self
            .source
            .search(&request.query, request.page, &request.filters)
            .await;
        self.apply(&request, result);
    }

    fn issue(&mut self, page: usize) -> PageRequest {
        self.in_flight = true;
        PageRequest {
            seq: self.seq,
            query: self.query.clone(),
            filters: self.filters.clone(),
            page,
        }
    }

    fn reset(&mut self) {
        self.articles.clear();
        self.total = 0;
        self.page = 0;
        self.has_more = true;
        self.in_flight = false;
        self.last_error = None;
        self.failed_page = None;
        self.seq += 1;
    }
}
