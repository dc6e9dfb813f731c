//! Data models for itemdesk.
//!
//! This module defines the core data structures:
//!
//! - [`Item`]: The single managed record
//! - [`ItemStatus`]: Lifecycle states (active, paused, archived)
//! - [`ItemCategory`]: Grouping (general, work, personal)
//! - [`NewItem`] / [`ItemPatch`]: Request bodies for create and partial update

mod item;
mod types;

pub use item::{Item, ItemPatch, NewItem};
pub use types::{ItemCategory, ItemId, ItemStatus};
