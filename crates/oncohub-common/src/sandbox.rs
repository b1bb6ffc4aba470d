use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::OncoHubError;

/// A capability-capped HTTP client that only allows requests to approved hosts.
/// OncoHub talks to NCBI and nothing else; anything outside the allowlist is
/// a programming error, not a retryable condition.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    pub fn new() -> Result<Self, OncoHubError> {
        let mut allowlist = HashSet::new();
        let domains = [
            "eutils.ncbi.nlm.nih.gov",  // esearch / esummary
            "pubmed.ncbi.nlm.nih.gov",  // article landing pages
            "doi.org",                  // DOI resolver
            "localhost",
            "127.0.0.1",
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| OncoHubError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    /// Exact host match or subdomain of an allowed host.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// GET request builder, rejected when the URL falls outside the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, OncoHubError> {
        if !self.is_allowed(url) {
            return Err(OncoHubError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }
        Ok(self.client.get(url))
    }
}
