//! Pokemon id extraction from resource URLs
//!
//! The upstream API never returns bare ids in list responses, only resource
//! URLs such as `https://pokeapi.co/api/v2/pokemon/25/`.

use crate::error::{Error, Result};
use crate::types::PokemonId;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Regex for the numeric segment of a pokemon resource URL: /pokemon/{id}/
static POKEMON_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/pokemon/(\d+)/").expect("pokemon URL regex is valid")
});

/// Parse the pokemon id out of a resource URL.
///
/// Fails with [`Error::UnresolvableIdentifier`] when the URL carries no
/// numeric `/pokemon/{id}/` segment or the number does not fit an id.
pub fn parse_pokemon_id(url: &str) -> Result<PokemonId> {
    POKEMON_URL_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::unresolvable(url))
}

/// Parse the pokemon id out of a resource URL, yielding `0` when it cannot be
/// resolved. `0` is never a valid id.
pub fn pokemon_id_or_zero(url: &str) -> PokemonId {
    parse_pokemon_id(url).unwrap_or_else(|e| {
        debug!("{e}, using id 0");
        0
    })
}
