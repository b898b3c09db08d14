use clap::Parser;
use orderwatch::cli::{self, output, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Watch(args) => cli::watch::execute(&cli, args).await,
        Commands::Offers(args) => cli::offers::execute(&cli, args).await,
        Commands::CheckConfig => cli::check::execute(&cli),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
