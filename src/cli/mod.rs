//! Command-line interface definitions.

pub mod check;
pub mod offers;
pub mod output;
pub mod watch;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::Config;
use crate::domain::{DesiredRank, ItemId};
use crate::error::Result;

/// Default configuration file path.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Orderwatch - surface cheap warframe.market sell offers as they appear.
#[derive(Parser, Debug)]
#[command(name = "orderwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch items and print new offers until interrupted
    Watch(WatchArgs),

    /// Show the cheapest in-game sellers of an item right now
    Offers(OffersArgs),

    /// Validate the configuration file
    CheckConfig,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Item names or IDs to watch ("Volt Prime Set" or volt_prime_set)
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Maximum price in platinum (defaults to watch.default_max_price)
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Rank policy: all or maxed
    #[arg(long, default_value = "all")]
    pub rank: DesiredRank,

    /// Max rank to require for "maxed" instead of the rank table
    #[arg(long)]
    pub max_rank_override: Option<String>,
}

/// Arguments for the `offers` subcommand.
#[derive(Parser, Debug)]
pub struct OffersArgs {
    /// Item name or ID
    pub item: String,

    /// Rank policy: all or maxed
    #[arg(long, default_value = "all")]
    pub rank: DesiredRank,

    /// Max rank to require for "maxed" instead of the rank table
    #[arg(long)]
    pub max_rank_override: Option<String>,
}

/// Load the configuration and apply command-line overrides.
///
/// A missing file at the default path means "use defaults"; a missing file
/// anywhere else is an error.
#[allow(clippy::result_large_err)]
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.config.exists() || cli.config != PathBuf::from(DEFAULT_CONFIG) {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    Ok(config)
}

/// Resolve a user-typed item into its ID and a display name.
///
/// An empty display name is returned when the input already was an ID, so
/// the request derives one.
pub fn parse_item(input: &str) -> (ItemId, String) {
    let id = ItemId::from_display_name(input);
    let display_name = if id.as_str() == input.trim() {
        String::new()
    } else {
        input.trim().to_string()
    };
    (id, display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_accepts_display_names() {
        let (id, name) = parse_item("Volt Prime Set");
        assert_eq!(id.as_str(), "volt_prime_set");
        assert_eq!(name, "Volt Prime Set");
    }

    #[test]
    fn parse_item_accepts_ids() {
        let (id, name) = parse_item("volt_prime_set");
        assert_eq!(id.as_str(), "volt_prime_set");
        assert!(name.is_empty());
    }

    #[test]
    fn watch_args_parse() {
        let cli = Cli::try_parse_from([
            "orderwatch",
            "watch",
            "-i",
            "serration",
            "--item",
            "Volt Prime Set",
            "--max-price",
            "50",
            "--rank",
            "maxed",
        ])
        .unwrap();

        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.items, vec!["serration", "Volt Prime Set"]);
                assert_eq!(args.max_price, Some(50));
                assert_eq!(args.rank, DesiredRank::Maxed);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn watch_requires_an_item() {
        assert!(Cli::try_parse_from(["orderwatch", "watch"]).is_err());
    }
}
