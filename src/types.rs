//! Common types used throughout Pokedex
//!
//! This module contains the catalog data model shared by the aggregation
//! layers, the CLI and the HTTP service.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Numeric primary key of a pokemon in the upstream catalog.
///
/// `0` is never a valid id; it marks a resource URL that could not be parsed.
pub type PokemonId = u32;

/// Lowercase type token used for filtering (e.g. "fire")
pub type TypeName = String;

/// Full membership list of one type, in upstream order
pub type TypeSet = Vec<PokemonId>;

// ============================================================================
// Catalog Constants
// ============================================================================

/// Number of pokemon shown per page
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Upstream type tokens that are not gameplay types and are never offered for filtering
pub const BLOCKED_TYPE_NAMES: [&str; 2] = ["unknown", "shadow"];

/// Check whether a type name may be exposed for filtering
pub fn is_filterable_type(name: &str) -> bool {
    !BLOCKED_TYPE_NAMES.contains(&name)
}

// ============================================================================
// Pagination Types
// ============================================================================

/// Pagination metadata for one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// 1-based page number that was requested
    pub current_page: u32,
    /// Number of pages, never below 1
    pub total_pages: u32,
    /// Number of ids across all pages
    pub total_count: u32,
    /// Whether a following page exists
    pub has_next: bool,
    /// Whether a preceding page exists
    pub has_previous: bool,
}

impl PaginationInfo {
    /// Metadata for a result with no entries at all
    pub fn empty() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::empty()
    }
}

/// One page of pokemon ids plus its pagination metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult {
    /// Ids on this page, in catalog order
    #[serde(rename = "pokemonIds", alias = "identifiers")]
    pub identifiers: Vec<PokemonId>,
    /// Pagination metadata
    pub pagination: PaginationInfo,
}

impl PagedResult {
    /// The zero-result value returned whenever a page cannot be computed
    pub fn empty() -> Self {
        Self {
            identifiers: Vec::new(),
            pagination: PaginationInfo::empty(),
        }
    }

    /// Check if the page holds no ids
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
