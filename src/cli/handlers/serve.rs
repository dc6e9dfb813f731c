use crate::server::run_server;
use crate::storage::{ItemStore, shared};
use anyhow::{Context, Result};
use chrono::Utc;
use std::net::IpAddr;

use super::CommandContext;

/// Command-line overrides for `serve`
pub struct ServeParams {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub seed_count: Option<usize>,
}

pub fn handle_serve(ctx: CommandContext, params: ServeParams) -> Result<()> {
    let mut settings = ctx.config.server;
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    let seed_count = params.seed_count.unwrap_or(ctx.config.store.seed_count);

    tracing::info!(root = %ctx.root.display(), seed_count, "Starting itemdesk");
    let store = shared(ItemStore::seeded(seed_count, Utc::now()));

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(&settings, store).await })
        .with_context(|| format!("Server on {} failed", settings.addr()))?;
    Ok(())
}
