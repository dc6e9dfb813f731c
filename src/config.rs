use crate::error::{ItemDeskError, Result};
use crate::storage::DEFAULT_SEED_COUNT;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".itemdesk.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDeskConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Number of items generated at startup.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
}

fn default_seed_count() -> usize {
    DEFAULT_SEED_COUNT
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed_count: default_seed_count(),
        }
    }
}

impl ItemDeskConfig {
    /// Loads configuration: defaults, then the YAML file (explicit path or the
    /// nearest `.itemdesk.yml` above `start_path`), then the `PORT` variable.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(start_path),
        };

        let mut config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ItemDeskError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        self.server.port = raw
            .parse()
            .map_err(|_| ItemDeskError::Config(format!("PORT must be a valid port, got {raw:?}")))?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
