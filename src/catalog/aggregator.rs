//! Aggregator - the catalog's public entry point

use super::combiner::combine;
use super::lister::UnfilteredLister;
use super::resolver::TypeSetResolver;
use crate::api::{PokeApiClient, Pokemon, Upstream};
use crate::cache::TtlCache;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pagination::paginate;
use crate::types::{
    is_filterable_type, PagedResult, PokemonId, TypeName, TypeSet, DEFAULT_PAGE_SIZE,
};
use futures::future::try_join_all;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default lifetime of cached pokemon details
const DEFAULT_DETAIL_TTL: Duration = Duration::from_secs(60);

/// Computes pages of pokemon ids, filtered or not, and serves pokemon details.
///
/// The non-`try_` methods never fail: any error is logged and replaced by an
/// empty value, so a failed query looks the same as one with no matches.
pub struct Aggregator {
    upstream: Arc<dyn Upstream>,
    resolver: TypeSetResolver,
    lister: UnfilteredLister,
    page_size: NonZeroU32,
    details: TtlCache<PokemonId, Pokemon>,
}

impl Aggregator {
    /// Create an aggregator with the default page size and detail cache
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self {
            resolver: TypeSetResolver::new(Arc::clone(&upstream)),
            lister: UnfilteredLister::new(Arc::clone(&upstream)),
            upstream,
            page_size: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            details: TtlCache::new(DEFAULT_DETAIL_TTL),
        }
    }

    /// Create an aggregator talking to the PokéAPI as configured
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let upstream = Arc::new(PokeApiClient::from_config(config)?);
        Ok(Self::new(upstream)
            .with_page_size(config.page_size())
            .with_cache_ttl(config.cache_ttl()))
    }

    /// Set the number of ids per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set how long pokemon details stay cached (zero disables caching)
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.details = TtlCache::new(ttl);
        self
    }

    /// Ids per page
    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// One page of pokemon ids, filtered by `type_filters` when non-empty.
    ///
    /// Returns [`PagedResult::empty`] if anything goes wrong.
    pub async fn get_page(&self, page: u32, type_filters: &[TypeName]) -> PagedResult {
        match self.try_get_page(page, type_filters).await {
            Ok(result) => result,
            Err(e) if e.is_upstream_unavailable() => {
                warn!(
                    "Upstream unavailable for page {} of types {:?}, returning no results: {}",
                    page, type_filters, e
                );
                PagedResult::empty()
            }
            Err(e) => {
                warn!(
                    "Failed to build page {} for types {:?}, returning no results: {}",
                    page, type_filters, e
                );
                PagedResult::empty()
            }
        }
    }

    /// Like [`Aggregator::get_page`], but surfaces the failure
    pub async fn try_get_page(&self, page: u32, type_filters: &[TypeName]) -> Result<PagedResult> {
        if page == 0 {
            return Err(Error::InvalidPage { page });
        }

        match type_filters {
            [] => self.lister.list_page(page, self.page_size).await,
            [type_name] => {
                let ids = self.resolver.resolve(type_name).await?;
                Ok(paginate(&ids, page, self.page_size))
            }
            _ => {
                let ids = self.resolve_combined(type_filters).await?;
                Ok(paginate(&ids, page, self.page_size))
            }
        }
    }

    /// Resolve every type concurrently; the first failure fails the whole set
    async fn resolve_combined(&self, type_filters: &[TypeName]) -> Result<Vec<PokemonId>> {
        let type_sets: Vec<TypeSet> = try_join_all(
            type_filters
                .iter()
                .map(|type_name| self.resolver.resolve(type_name)),
        )
        .await?;

        let combined = combine(&type_sets, type_filters.len());
        debug!(
            "Combined {} types into {} pokemon",
            type_filters.len(),
            combined.len()
        );
        Ok(combined)
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Type names offered for filtering, in upstream order.
    ///
    /// Never includes `unknown` or `shadow`; empty if the upstream fails.
    pub async fn list_type_names(&self) -> Vec<TypeName> {
        self.try_list_type_names().await.unwrap_or_else(|e| {
            warn!("Failed to list pokemon types, returning none: {}", e);
            Vec::new()
        })
    }

    /// Like [`Aggregator::list_type_names`], but surfaces the failure
    pub async fn try_list_type_names(&self) -> Result<Vec<TypeName>> {
        let list = self.upstream.list_types().await?;
        Ok(list
            .results
            .into_iter()
            .map(|t| t.name)
            .filter(|name| is_filterable_type(name))
            .collect())
    }

    // ========================================================================
    // Details
    // ========================================================================

    /// Detail of one pokemon, or `None` if it cannot be fetched
    pub async fn pokemon(&self, id: PokemonId) -> Option<Pokemon> {
        match self.try_pokemon(id).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                warn!("Failed to fetch pokemon {}: {}", id, e);
                None
            }
        }
    }

    /// Like [`Aggregator::pokemon`], but surfaces the failure.
    ///
    /// Successful lookups are cached for the configured time-to-live.
    pub async fn try_pokemon(&self, id: PokemonId) -> Result<Pokemon> {
        if let Some(pokemon) = self.details.get(&id).await {
            debug!("Pokemon {} served from cache", id);
            return Ok(pokemon);
        }

        let pokemon = self.upstream.pokemon(id).await?;
        self.details.insert(id, pokemon.clone()).await;
        Ok(pokemon)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("page_size", &self.page_size)
            .field("cache_enabled", &self.details.is_enabled())
            .finish_non_exhaustive()
    }
}
