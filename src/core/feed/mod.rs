pub mod fetcher;
pub mod parser;
pub mod types;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_URL: &str = "https://devblogs.microsoft.com/dotnet/category/maui/feed/";

const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    pub feed_url: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("DEVBLOG_FEED_URL") {
            if !url.trim().is_empty() {
                config.feed_url = url;
            }
        }
        if let Some(timeout_secs) = std::env::var("DEVBLOG_FEED_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse().ok())
        {
            config.timeout_secs = timeout_secs;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_feed_url() {
        let config = FeedConfig::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
