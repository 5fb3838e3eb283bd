//! Upstream catalog API
//!
//! Typed access to the PokéAPI resources the catalog is built from.
//!
//! # Overview
//!
//! - [`Upstream`] - the seam the aggregation layers talk to
//! - [`PokeApiClient`] - production implementation over [`crate::http::HttpClient`]
//! - Wire types for the `/type` and `/pokemon` resources
//! - [`parse_pokemon_id`] - recovers the numeric id embedded in a resource URL

mod client;
mod identifier;
mod types;

pub use client::{PokeApiClient, Upstream, DEFAULT_BASE_URL};
pub use identifier::{parse_pokemon_id, pokemon_id_or_zero};
pub use types::{
    NamedResource, NamedResourceList, OfficialArtwork, OtherSprites, Pokemon, PokemonTypeSlot,
    Sprites, TypeDetail, TypeMember,
};

#[cfg(test)]
mod tests;
