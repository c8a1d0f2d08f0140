pub mod core;

use std::time::Duration;

pub use crate::core::feed::fetcher::{fetch_feed, FetchError, FetchedFeed};
pub use crate::core::feed::parser::{parse_posts, FeedParseError, DUBLIN_CORE_NS};
pub use crate::core::feed::types::BlogPost;
pub use crate::core::feed::{FeedConfig, DEFAULT_FEED_URL};
pub use crate::core::store::PostStore;

const USER_AGENT: &str = concat!("devblog-reader/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("http client init failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("feed parse failed: {0}")]
    Parse(#[from] FeedParseError),
}

#[derive(Debug, Clone)]
pub struct BlogFeedService {
    client: reqwest::Client,
    config: FeedConfig,
    store: PostStore,
}

impl BlogFeedService {
    pub fn new(config: FeedConfig) -> Result<Self, RefreshError> {
        Self::with_store(config, PostStore::new())
    }

    pub fn with_store(config: FeedConfig, store: PostStore) -> Result<Self, RefreshError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(RefreshError::Client)?;
        Ok(Self {
            client,
            config,
            store,
        })
    }

    // Fetches and parses the whole feed before touching the store, so the
    // previous list stays visible until the new batch is complete.
    pub async fn refresh(&self) -> Result<usize, RefreshError> {
        let fetched = fetch_feed(&self.client, &self.config.feed_url).await?;
        let posts = parse_posts(&fetched.body)?;
        let count = posts.len();
        self.store.replace_all(posts);
        tracing::info!(url = %self.config.feed_url, count, "feed refreshed");
        Ok(count)
    }

    pub fn posts(&self) -> Vec<BlogPost> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn feed_url(&self) -> &str {
        &self.config.feed_url
    }
}
