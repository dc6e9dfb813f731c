use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use itemdesk::cli::handlers::{self, CommandContext, ServeParams};
use itemdesk::cli::{Cli, Commands};
use itemdesk::config::ItemDeskConfig;
use itemdesk::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init => handlers::handle_init(&cwd),
        Commands::Serve {
            host,
            port,
            seed_count,
        } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            handlers::handle_serve(
                ctx,
                ServeParams {
                    host,
                    port,
                    seed_count,
                },
            )
        }
        Commands::Seed { count, json } => {
            let ctx = load_context(cli.config.as_deref(), cwd)?;
            handlers::handle_seed(&ctx, count, json)
        }
    }
}

fn load_context(config_path: Option<&Path>, cwd: PathBuf) -> Result<CommandContext> {
    let config =
        ItemDeskConfig::load(config_path, &cwd).context("Failed to load itemdesk configuration")?;
    Ok(CommandContext::new(config, cwd))
}
