//! modelsync demo client
//!
//! Usage:
//!   modelsync --base-url http://localhost:3000/users list
//!   modelsync fetch 5784
//!   modelsync save --name Nui --age 20

use anyhow::Result;
use clap::Parser;
use modelsync_cli::{commands, Args, Command};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.sync_config();
    debug!("using endpoint {}", config.base_url);

    let output = match args.command {
        Command::Fetch { id } => commands::fetch(config, &id).await?,
        Command::Save { id, name, age } => commands::save(config, id, name, age).await?,
        Command::List => commands::list(config).await?,
        Command::Events => commands::events(config)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
