//! Unfiltered listing backed by the upstream's own pagination

use crate::api::Upstream;
use crate::error::Result;
use crate::pagination::{page_offset, total_pages};
use crate::types::{PagedResult, PaginationInfo, PokemonId};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Lists pokemon page by page without any type filter
#[derive(Clone)]
pub struct UnfilteredLister {
    upstream: Arc<dyn Upstream>,
}

impl UnfilteredLister {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Fetch one page straight from the upstream listing.
    ///
    /// `has_next` and `has_previous` mirror the upstream's `next` and
    /// `previous` links rather than being derived from the total count.
    pub async fn list_page(&self, page: u32, page_size: NonZeroU32) -> Result<PagedResult> {
        let offset = page_offset(page, page_size);
        let list = self.upstream.list_pokemon(page_size.get(), offset).await?;

        let identifiers: Vec<PokemonId> = list
            .results
            .iter()
            .map(|item| item.pokemon_id_or_zero())
            .collect();

        debug!(
            "Listed {} pokemon at offset {} of {}",
            identifiers.len(),
            offset,
            list.count
        );

        Ok(PagedResult {
            identifiers,
            pagination: PaginationInfo {
                current_page: page,
                total_pages: total_pages(list.count, page_size),
                total_count: list.count,
                has_next: list.next.is_some(),
                has_previous: list.previous.is_some(),
            },
        })
    }
}

impl std::fmt::Debug for UnfilteredLister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnfilteredLister").finish_non_exhaustive()
    }
}
