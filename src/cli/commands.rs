use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "itemdesk")]
#[command(
    author,
    version,
    about = "An in-memory item API with filtering, search, sorting and pagination"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .itemdesk.yml by default)
    #[arg(long, global = true, env = "ITEMDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .itemdesk.yml into the current directory
    Init,

    /// Run the HTTP API
    #[command(visible_alias = "s")]
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of items to seed the store with
        #[arg(long)]
        seed_count: Option<usize>,
    },

    /// Print the dataset the store starts with
    Seed {
        /// Number of items to generate (defaults to the configured seed count)
        #[arg(short, long)]
        count: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
