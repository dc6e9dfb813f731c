use crate::config::{CONFIG_FILE_NAME, ItemDeskConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(cwd: &Path) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    ItemDeskConfig::default().save(&config_path)?;

    println!("{} {}", "Initialized".green(), config_path.display());
    Ok(())
}
