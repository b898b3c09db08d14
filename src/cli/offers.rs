//! Handler for the `offers` command.

use crate::app::build_supervisor;
use crate::cli::{load_config, output, parse_item, Cli, OffersArgs};
use crate::error::Result;

/// Search once and print the cheapest in-game offers.
pub async fn execute(cli: &Cli, args: &OffersArgs) -> Result<()> {
    let config = load_config(cli)?;
    config.init_logging();

    let supervisor = build_supervisor(&config)?;
    let (item, _) = parse_item(&args.item);

    let offers = supervisor
        .search_offers(&item, args.rank, args.max_rank_override.as_deref())
        .await?;

    output::section(&format!("{} ({})", item.display_name(), args.rank));
    if offers.is_empty() {
        output::warn("No in-game sellers found");
    } else {
        output::offers(&offers);
    }
    Ok(())
}
