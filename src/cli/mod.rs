//! CLI module
//!
//! Command-line interface for browsing the directory.
//!
//! # Commands
//!
//! - `page` - Print one page of pokemon ids, optionally filtered by type
//! - `types` - List the types available for filtering
//! - `pokemon` - Print the detail of one pokemon
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve};
