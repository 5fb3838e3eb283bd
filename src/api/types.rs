//! Wire types for the upstream catalog API

use super::identifier::{parse_pokemon_id, pokemon_id_or_zero};
use crate::error::Result;
use crate::types::PokemonId;
use serde::{Deserialize, Serialize};

/// Base URL for official sprites, used when a pokemon has no sprite of its own
const SPRITE_FALLBACK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// A `{name, url}` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Pokemon id embedded in the resource URL
    pub fn pokemon_id(&self) -> Result<PokemonId> {
        parse_pokemon_id(&self.url)
    }

    /// Pokemon id embedded in the resource URL, `0` if it cannot be parsed
    pub fn pokemon_id_or_zero(&self) -> PokemonId {
        pokemon_id_or_zero(&self.url)
    }
}

/// Paginated list of named resources (`/type`, `/pokemon?limit=&offset=`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceList {
    /// Total number of resources across all pages
    pub count: u32,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail of one type (`/type/{name}`), including every member pokemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

/// Membership of one pokemon in a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
    /// Whether this is the pokemon's first or second type
    pub slot: u32,
}

/// Pokemon detail (`/pokemon/{id}`), reduced to what a card needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

impl Pokemon {
    /// Sprite to display, falling back to the official sprite repository
    pub fn sprite_url(&self) -> String {
        match &self.sprites.front_default {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{SPRITE_FALLBACK_BASE}/{}.png", self.id),
        }
    }

    /// Names of this pokemon's types, ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One of a pokemon's types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
