//! In-memory storage for items.
//!
//! There is exactly one [`ItemStore`] per running service. It is created at
//! startup from a deterministic seed and lives until the process exits.
//!
//! ## Components
//!
//! - [`ItemStore`]: lookup, lifecycle operations and listing
//! - [`seed_items`]: the starting dataset
//! - [`SharedStore`]: the handle request handlers hold

mod seed;
mod store;

pub use seed::{DEFAULT_SEED_COUNT, seed_items};
pub use store::ItemStore;

use parking_lot::Mutex;
use std::sync::Arc;

/// One lock guards each request's whole read or mutate sequence.
pub type SharedStore = Arc<Mutex<ItemStore>>;

pub fn shared(store: ItemStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}
