//! Type-set resolution

use crate::api::Upstream;
use crate::error::Result;
use crate::types::{PokemonId, TypeSet};
use std::sync::Arc;
use tracing::debug;

/// Resolves a type name to the ids of every pokemon of that type
#[derive(Clone)]
pub struct TypeSetResolver {
    upstream: Arc<dyn Upstream>,
}

impl TypeSetResolver {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Fetch the members of `type_name` in upstream order.
    ///
    /// Members whose URL carries no id are kept as id `0`.
    pub async fn resolve(&self, type_name: &str) -> Result<TypeSet> {
        let detail = self.upstream.type_members(type_name).await?;
        let ids: Vec<PokemonId> = detail
            .pokemon
            .iter()
            .map(|member| member.pokemon.pokemon_id_or_zero())
            .collect();

        debug!("Resolved type '{}' to {} pokemon", type_name, ids.len());
        Ok(ids)
    }
}

impl std::fmt::Debug for TypeSetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSetResolver").finish_non_exhaustive()
    }
}
