//! Shared application state for the web server.

use std::sync::{Arc, Mutex as StdMutex};

use anyhow::Result;
use oncohub_common::sandbox::SandboxClient;
use oncohub_feed::FeedSession;
use oncohub_search::sources::pubmed::PubMedClient;
use oncohub_store::{Bookmarks, JsonFileStore, SearchHistory};
use tokio::sync::Mutex;

use crate::config::Config;

/// One JSON file backs both persisted concerns under distinct keys.
pub type SharedStore = Arc<StdMutex<JsonFileStore>>;

/// Shared state injected into every Axum handler. The session mutex also
/// serialises fetches, so at most one page request runs at a time.
pub struct AppState {
    pub session: Mutex<FeedSession<PubMedClient>>,
    pub bookmarks: Mutex<Bookmarks<SharedStore>>,
    pub history: Mutex<SearchHistory<SharedStore>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let client = PubMedClient::new(SandboxClient::new()?, config.pubmed.api_key.clone());

        let store: SharedStore = Arc::new(StdMutex::new(JsonFileStore::open(config.store_path())?));

        Ok(Self {
            session: Mutex::new(FeedSession::new(client)),
            bookmarks: Mutex::new(Bookmarks::new(store.clone())),
            history: Mutex::new(SearchHistory::new(store)),
        })
    }
}

pub type SharedState = Arc<AppState>;
