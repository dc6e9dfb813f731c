//! # itemdesk - an in-memory item API
//!
//! itemdesk serves CRUD operations over a single in-memory collection of
//! items, with filtering, free-text search, sorting and pagination. The
//! collection is seeded deterministically at startup and lives for as long
//! as the process does.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on the default port (3000, or $PORT)
//! itemdesk serve
//!
//! # List active work items, oldest first
//! curl 'http://localhost:3000/items?status=active&category=work&order=asc'
//!
//! # Create an item
//! curl -X POST http://localhost:3000/items \
//!      -H 'content-type: application/json' -d '{"name": "Task X"}'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Item, ItemStatus, ItemCategory)
//! - [`query`]: Listing parameters and the filter/sort/paginate pipeline
//! - [`server`]: HTTP routes and server startup
//! - [`storage`]: The in-memory item store and its seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.itemdesk.yml` files and the `PORT` environment variable.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ItemDeskError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for items.
pub mod model;

pub mod query;
pub mod search;

/// HTTP transport built on axum.
pub mod server;

/// In-memory storage layer.
pub mod storage;

/// Input validation and normalization.
pub mod validation;
