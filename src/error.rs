use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemDeskError {
    /// Rejected input; the message is returned verbatim to HTTP clients.
    #[error("{0}")]
    Validation(String),

    #[error("Item not found")]
    NotFound,

    #[error("Invalid id")]
    InvalidId,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ItemDeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        ItemDeskError::Validation(message.into())
    }

    /// Whether the caller sent a request that can never succeed as-is.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ItemDeskError::Validation(_) | ItemDeskError::InvalidId | ItemDeskError::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, ItemDeskError>;
