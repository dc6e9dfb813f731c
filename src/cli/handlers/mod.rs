mod init;
mod seed;
mod serve;

pub use init::handle_init;
pub use seed::handle_seed;
pub use serve::{ServeParams, handle_serve};

use crate::config::ItemDeskConfig;
use std::path::PathBuf;

/// Common context passed to command handlers that need configuration
pub struct CommandContext {
    pub config: ItemDeskConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: ItemDeskConfig, root: PathBuf) -> Self {
        Self { config, root }
    }
}
