//! warframe.market REST API client.
//!
//! Fetches the order list of one item per call. Requests are bounded by the
//! configured timeout; 404 and 410 mean the item was removed from the market.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::dto::parse_orders;
use crate::app::MarketplaceConfig;
use crate::domain::ItemId;
use crate::error::{ConfigError, Error, FetchError, Result};
use crate::port::{OrderBatch, OrderSource};

/// HTTP client for the warframe.market v1 API.
pub struct WarframeMarketClient {
    client: Client,
    base_url: Url,
    order_limit: u32,
}

impl WarframeMarketClient {
    /// Create a client from marketplace settings.
    #[allow(clippy::result_large_err)]
    pub fn new(config: &MarketplaceConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: format!("'{}' cannot be used as a base URL", config.api_url),
            }
            .into());
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            order_limit: config.order_limit,
        })
    }

    /// `{base}/items/{item}/orders?limit=..&order_by=creation_date`
    #[allow(clippy::result_large_err)]
    pub fn orders_url(&self, item: &ItemId) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["items", item.as_str(), "orders"]);
        url.query_pairs_mut()
            .append_pair("limit", &self.order_limit.to_string())
            .append_pair("order_by", "creation_date");
        Ok(url)
    }
}

#[async_trait]
impl OrderSource for WarframeMarketClient {
    async fn fetch_orders(&self, item: &ItemId) -> Result<OrderBatch> {
        let url = self.orders_url(item)?;
        debug!(url = %url, "Fetching orders");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(OrderBatch::ItemGone {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                item: item.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body: Value = response.json().await?;
        let orders = parse_orders(item, body)?;
        debug!(item = %item, count = orders.len(), "Fetched orders");

        Ok(OrderBatch::Orders(orders))
    }

    fn name(&self) -> &'static str {
        "warframe.market"
    }
}
