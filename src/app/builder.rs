//! Supervisor wiring from configuration.

use std::sync::Arc;

use tracing::info;

use super::config::Config;
use super::supervisor::Supervisor;
use crate::adapter::market::WarframeMarketClient;
use crate::error::Result;

/// Build a supervisor backed by the warframe.market REST API.
#[allow(clippy::result_large_err)]
pub fn build_supervisor(config: &Config) -> Result<Supervisor> {
    let client = WarframeMarketClient::new(&config.marketplace)?;
    info!(
        api_url = %config.marketplace.api_url,
        poll_interval_secs = config.watch.poll_interval_secs,
        tick_millis = config.watch.tick_millis,
        "Marketplace client ready"
    );

    let supervisor = Supervisor::new(Arc::new(client), config.ranks.table(), config.watch.timing())
        .with_search_limit(config.search.limit);
    Ok(supervisor)
}
