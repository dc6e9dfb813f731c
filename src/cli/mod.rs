//! Command-line interface for itemdesk.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
