//! Legacy Bridge CLI entry point.

use clap::Parser;

use legacy_bridge::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Config(args) => commands::config::execute(&args),
    }
}
