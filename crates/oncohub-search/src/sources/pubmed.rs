//! PubMed E-utilities client.
//!
//! Two-step search: esearch resolves a query to PMIDs plus a total count,
//! esummary resolves a PMID batch to metadata records.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi

use async_trait::async_trait;
use oncohub_common::sandbox::SandboxClient as Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::ArticleSource;
use crate::models::{Article, Filters, SearchPage, PAGE_SIZE};
use crate::query::{build_term, page_offset};

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

pub struct PubMedClient {
    client: Client,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("db", "pubmed".to_string()), ("retmode", "json".to_string())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search PubMed; returns (PMIDs for the requested page, total count).
    #[instrument(skip(self, term))]
    async fn esearch(&self, term: &str, page: usize) -> anyhow::Result<(Vec<String>, usize)> {
        let mut params = self.base_params();
        params.push(("term", term.to_string()));
        params.push(("retmax", PAGE_SIZE.to_string()));
        params.push(("retstart", page_offset(page, PAGE_SIZE).to_string()));
        params.push(("sort", "date".to_string()));

        let resp: Value = self.client
            .get(ESEARCH_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let (ids, total) = parse_esearch(&resp);
        debug!(count = ids.len(), total, "PubMed esearch returned PMIDs");
        Ok((ids, total))
    }

    /// Fetch esummary records for a PMID batch, mapped into Articles
    /// in the order the ids were given.
    #[instrument(skip(self))]
    async fn esummary(&self, pmids: &[String]) -> anyhow::Result<Vec<Article>> {
        if pmids.is_empty() {
            return Ok(vec![]);
        }

        let mut params = self.base_params();
        params.push(("id", pmids.join(",")));

        let resp: Value = self.client
            .get(ESUMMARY_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        Ok(parse_esummary(&resp, pmids))
    }
}

#[async_trait]
impl ArticleSource for PubMedClient {
    async fn search(&self, query: &str, page: usize, filters: &Filters) -> anyhow::Result<SearchPage> {
        let term = build_term(query, filters);
        let (ids, total) = self.esearch(&term, page).await?;
        if ids.is_empty() {
            return Ok(SearchPage::default());
        }
        let articles = self.esummary(&ids).await?;
        Ok(SearchPage { articles, total })
    }
}

/// Extract the id list and total count from an esearch JSON response.
/// The count arrives as a string; missing or unparseable defaults to 0.
pub fn parse_esearch(resp: &Value) -> (Vec<String>, usize) {
    let result = &resp["esearchresult"];

    let ids = result["idlist"]
        .as_array()
        .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
        .unwrap_or_default();

    let total = result["count"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    (ids, total)
}

/// Map esummary records to Articles, preserving the given id order.
/// The `result` object keys records by uid alongside a `uids` index entry;
/// entries without a uid are skipped. Missing optional fields take the
/// documented placeholder defaults.
pub fn parse_esummary(resp: &Value, order: &[String]) -> Vec<Article> {
    let result = &resp["result"];

    order
        .iter()
        .filter_map(|id| {
            let record = &result[id.as_str()];
            record["uid"].as_str().map(|uid| map_record(uid, record))
        })
        .collect()
}

fn map_record(uid: &str, record: &Value) -> Article {
    let authors = record["authors"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    let keywords = record["keywords"]
        .as_array()
        .map(|a| a.iter().filter_map(|v| v.as_str().map(String::from)).collect())
        .unwrap_or_default();

    Article {
        id: uid.to_string(),
        title: non_empty(record["title"].as_str()).unwrap_or("Untitled").to_string(),
        authors,
        abstract_text: non_empty(record["abstract"].as_str())
            .unwrap_or("No abstract available")
            .to_string(),
        publish_date: record["pubdate"].as_str().unwrap_or_default().to_string(),
        journal: non_empty(record["source"].as_str()).unwrap_or("Unknown Journal").to_string(),
        doi: record["doi"].as_str().map(String::from),
        keywords,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
