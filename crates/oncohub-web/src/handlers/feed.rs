//! Feed API — search, filters, pagination, and the feed snapshot.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use oncohub_common::ApiError;
use oncohub_digest::{extract_summary, infer_cancer_types, split_sentences};
use oncohub_feed::FeedSession;
use oncohub_search::models::{Article, Filters};
use oncohub_search::sources::pubmed::PubMedClient;
use oncohub_store::{Bookmarks, KvStore};

use crate::state::SharedState;

/// Sentences per card summary.
const SUMMARY_SENTENCES: usize = 2;

/// An article decorated for rendering: summary points, inferred subject
/// tags, outbound links, and bookmark state.
#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub abstract_text: String,
    pub journal: String,
    pub publish_date: String,
    pub display_date: String,
    pub keywords: Vec<String>,
    pub summary_points: Vec<String>,
    pub tags: Vec<&'static str>,
    pub pubmed_url: String,
    pub doi_url: Option<String>,
    pub bookmarked: bool,
}

/// Snapshot of the current feed returned by every feed endpoint.
#[derive(Debug, Serialize)]
pub struct FeedView {
    pub query: String,
    pub filters: Filters,
    pub articles: Vec<ArticleView>,
    pub total: usize,
    pub has_more: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub query: String,
}

pub fn pubmed_url(id: &str) -> String {
    format!("https://pubmed.ncbi.nlm.nih.gov/{}", id)
}

pub fn doi_url(doi: &str) -> String {
    format!("https://doi.org/{}", doi)
}

/// Render a loose PubMed pubdate ("2024 Mar 5") for display; anything
/// that does not parse passes through unchanged.
pub fn format_pub_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y %b %d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn article_view<S: KvStore>(article: &Article, bookmarks: &Bookmarks<S>) -> ArticleView {
    let summary = extract_summary(&article.abstract_text, SUMMARY_SENTENCES);
    let summary_points = split_sentences(&summary)
        .into_iter()
        .map(|s| s.text)
        .collect();

    ArticleView {
        id: article.id.clone(),
        title: article.title.clone(),
        authors: article.authors.clone(),
        abstract_text: article.abstract_text.clone(),
        journal: article.journal.clone(),
        publish_date: article.publish_date.clone(),
        display_date: format_pub_date(&article.publish_date),
        keywords: article.keywords.clone(),
        summary_points,
        tags: infer_cancer_types(article),
        pubmed_url: pubmed_url(&article.id),
        doi_url: article.doi.as_deref().map(doi_url),
        bookmarked: bookmarks.contains(&article.id).unwrap_or(false),
    }
}

async fn snapshot(
    state: &SharedState,
    session: &FeedSession<PubMedClient>,
) -> Result<FeedView, ApiError> {
    let bookmarks = state.bookmarks.lock().await;
    let articles = session
        .articles()
        .iter()
        .map(|a| article_view(a, &*bookmarks))
        .collect();

    Ok(FeedView {
        query: session.query().to_string(),
        filters: session.filters().clone(),
        articles,
        total: session.total(),
        has_more: session.has_more(),
        error: session.last_error().map(String::from),
    })
}

/// GET /api/feed — current feed state.
pub async fn feed_view(State(state): State<SharedState>) -> Result<Json<FeedView>, ApiError> {
    let session = state.session.lock().await;
    Ok(Json(snapshot(&state, &session).await?))
}

/// POST /api/search — commit a query: record history, reset, fetch page 1.
pub async fn search_submit(
    State(state): State<SharedState>,
    Json(body): Json<SearchBody>,
) -> Result<Json<FeedView>, ApiError> {
    {
        let mut history = state.history.lock().await;
        history.record(&body.query)?;
    }

    let mut session = state.session.lock().await;
    let request = session.set_query(&body.query);
    session.run(request).await;
    Ok(Json(snapshot(&state, &session).await?))
}

/// POST /api/filters — replace the filter selection and refetch.
pub async fn filters_submit(
    State(state): State<SharedState>,
    Json(filters): Json<Filters>,
) -> Result<Json<FeedView>, ApiError> {
    let mut session = state.session.lock().await;
    let request = session.set_filters(filters);
    session.run(request).await;
    Ok(Json(snapshot(&state, &session).await?))
}

/// POST /api/feed/more — fetch the next page when one is available.
pub async fn feed_more(State(state): State<SharedState>) -> Result<Json<FeedView>, ApiError> {
    let mut session = state.session.lock().await;
    if let Some(request) = session.next_page() {
        session.run(request).await;
    }
    Ok(Json(snapshot(&state, &session).await?))
}

/// POST /api/feed/retry — re-run the last failed page request.
pub async fn feed_retry(State(state): State<SharedState>) -> Result<Json<FeedView>, ApiError> {
    let mut session = state.session.lock().await;
    if let Some(request) = session.retry() {
        session.run(request).await;
    }
    Ok(Json(snapshot(&state, &session).await?))
}
