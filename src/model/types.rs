use crate::error::{ItemDeskError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Numeric item identifier, allocated from a monotonic counter.
pub type ItemId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Active, ItemStatus::Paused, ItemStatus::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Paused => "paused",
            ItemStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ItemDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(ItemStatus::Active),
            "paused" => Ok(ItemStatus::Paused),
            "archived" => Ok(ItemStatus::Archived),
            _ => Err(ItemDeskError::validation("Invalid status")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    #[default]
    General,
    Work,
    Personal,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::General,
        ItemCategory::Work,
        ItemCategory::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::General => "general",
            ItemCategory::Work => "work",
            ItemCategory::Personal => "personal",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ItemDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "general" => Ok(ItemCategory::General),
            "work" => Ok(ItemCategory::Work),
            "personal" => Ok(ItemCategory::Personal),
            _ => Err(ItemDeskError::validation("Invalid category")),
        }
    }
}
