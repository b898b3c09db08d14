//! Marketplace connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// warframe.market REST settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
    /// Base URL of the v1 API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Ceiling for a single request, connect included (seconds).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum number of orders requested per poll.
    #[serde(default = "default_order_limit")]
    pub order_limit: u32,
}

fn default_api_url() -> String {
    "https://api.warframe.market/v1".into()
}

fn default_user_agent() -> String {
    "wf-sniper/1.0".into()
}

const fn default_request_timeout_secs() -> u64 {
    10
}

const fn default_order_limit() -> u32 {
    100
}

impl MarketplaceConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            order_limit: default_order_limit(),
        }
    }
}
