//! Handler for the `check-config` command.

use crate::cli::{load_config, output, Cli};
use crate::error::Result;

/// Validate the configuration and print its effective settings.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    output::section("Configuration");
    output::key_value("File", cli.config.display());
    output::key_value("API", &config.marketplace.api_url);
    output::key_value("Timeout", format!("{}s", config.marketplace.request_timeout_secs));
    output::key_value("Poll", format!("{}s", config.watch.poll_interval_secs));
    output::key_value("Tick", format!("{}ms", config.watch.tick_millis));
    output::key_value("Default rank", config.ranks.default_max_rank);
    output::key_value("Search limit", config.search.limit);
    println!();
    output::ok("Configuration valid");
    Ok(())
}
