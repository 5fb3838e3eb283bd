// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Pokedex
//!
//! A browsable pokemon directory over the public PokéAPI: paginated listing,
//! filtering by one or more types, and per-pokemon detail.
//!
//! ## Features
//!
//! - **Type Filtering**: Intersection for two types, "at least two of N" for more
//! - **ID Pagination**: Fixed-size pages of pokemon ids with pagination metadata
//! - **Graceful Degradation**: Upstream failures yield empty results, never errors
//! - **Detail Cache**: Short-lived in-memory cache for pokemon lookups
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex::{Aggregator, AppConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let aggregator = Aggregator::from_config(&AppConfig::default())?;
//!
//!     // Second page of pokemon that are both fire and flying
//!     let filters = vec!["fire".to_string(), "flying".to_string()];
//!     let page = aggregator.get_page(2, &filters).await;
//!
//!     for id in &page.identifiers {
//!         if let Some(pokemon) = aggregator.pokemon(*id).await {
//!             println!("{} {}", pokemon.id, pokemon.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     CLI / HTTP service                       │
//! │   page --types a,b     types     pokemon <id>     serve      │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴────────────────────────────────┐
//! │                          Aggregator                          │
//! │  get_page()          list_type_names()          pokemon()    │
//! ├───────────────┬──────────────┬───────────────┬───────────────┤
//! │   Resolver    │   Combiner   │   Paginator   │    Lister     │
//! ├───────────────┴──────────────┴───────────────┴───────────────┤
//! │          Upstream (PokéAPI) → HTTP client → governor         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Catalog data model
pub mod types;

/// HTTP client with rate limiting and optional retries
pub mod http;

/// Upstream PokéAPI access
pub mod api;

/// Page arithmetic
pub mod pagination;

/// Type filtering and page aggregation
pub mod catalog;

/// Time-bounded in-memory cache
pub mod cache;

/// Application configuration
pub mod config;

/// Browse state in page URLs
pub mod query;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use api::{PokeApiClient, Pokemon, Upstream};
pub use catalog::Aggregator;
pub use config::AppConfig;
pub use query::BrowseQuery;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
