//! Tests for the upstream API module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::PokemonId;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> PokeApiClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .build();
    PokeApiClient::new(HttpClient::with_config(config).unwrap())
}

// ============================================================================
// Identifier Tests
// ============================================================================

#[test_case("https://pokeapi.co/api/v2/pokemon/25/", 25 ; "canonical url")]
#[test_case("https://pokeapi.co/api/v2/pokemon/10034/", 10034 ; "alternate form id")]
#[test_case("/pokemon/1/", 1 ; "relative path")]
fn test_parse_pokemon_id(url: &str, expected: PokemonId) {
    assert_eq!(parse_pokemon_id(url).unwrap(), expected);
    assert_eq!(pokemon_id_or_zero(url), expected);
}

#[test_case("https://pokeapi.co/api/v2/pokemon/25" ; "missing trailing slash")]
#[test_case("https://pokeapi.co/api/v2/pokemon/pikachu/" ; "name instead of id")]
#[test_case("https://pokeapi.co/api/v2/pokemon-species/25/" ; "other resource")]
#[test_case("https://pokeapi.co/api/v2/pokemon/99999999999/" ; "overflowing id")]
#[test_case("" ; "empty")]
fn test_unresolvable_pokemon_id(url: &str) {
    let err = parse_pokemon_id(url).unwrap_err();
    assert!(matches!(err, Error::UnresolvableIdentifier { .. }));
    assert_eq!(pokemon_id_or_zero(url), 0);
}

// ============================================================================
// Wire Type Tests
// ============================================================================

#[test]
fn test_type_detail_deserialize() {
    let detail: TypeDetail = serde_json::from_value(json!({
        "id": 10,
        "name": "fire",
        "damage_relations": {},
        "pokemon": [
            {"pokemon": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/"}, "slot": 1},
            {"pokemon": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon/6/"}, "slot": 1}
        ]
    }))
    .unwrap();

    assert_eq!(detail.name, "fire");
    let ids: Vec<PokemonId> = detail
        .pokemon
        .iter()
        .map(|m| m.pokemon.pokemon_id_or_zero())
        .collect();
    assert_eq!(ids, vec![4, 6]);
}

#[test]
fn test_pokemon_sprite_fallback() {
    let mut pokemon: Pokemon = serde_json::from_value(json!({
        "id": 25,
        "name": "pikachu",
        "sprites": {"front_default": null},
        "types": []
    }))
    .unwrap();

    assert_eq!(
        pokemon.sprite_url(),
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
    );

    pokemon.sprites.front_default = Some("https://img.example/25.png".to_string());
    assert_eq!(pokemon.sprite_url(), "https://img.example/25.png");
}

#[test]
fn test_pokemon_type_names_by_slot() {
    let pokemon: Pokemon = serde_json::from_value(json!({
        "id": 6,
        "name": "charizard",
        "sprites": {
            "front_default": "https://img.example/6.png",
            "other": {"official-artwork": {"front_default": "https://img.example/art/6.png"}}
        },
        "types": [
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
            {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}
        ]
    }))
    .unwrap();

    assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
    assert_eq!(
        pokemon.sprites.other.official_artwork.front_default.as_deref(),
        Some("https://img.example/art/6.png")
    );
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_list_pokemon_sends_limit_and_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "24"))
        .and(query_param("offset", "48"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=72&limit=24",
            "previous": "https://pokeapi.co/api/v2/pokemon?offset=24&limit=24",
            "results": [
                {"name": "pidgeot", "url": "https://pokeapi.co/api/v2/pokemon/18/"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let list = api_for(&mock_server).list_pokemon(24, 48).await.unwrap();

    assert_eq!(list.count, 1302);
    assert!(list.next.is_some());
    assert_eq!(list.results[0].pokemon_id().unwrap(), 18);
}

#[tokio::test]
async fn test_type_members_fetches_named_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/type/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "name": "ghost",
            "pokemon": [
                {"pokemon": {"name": "gastly", "url": "https://pokeapi.co/api/v2/pokemon/92/"}, "slot": 1}
            ]
        })))
        .mount(&mock_server)
        .await;

    let detail = api_for(&mock_server).type_members("ghost").await.unwrap();
    assert_eq!(detail.id, 8);
    assert_eq!(detail.pokemon.len(), 1);
}

#[tokio::test]
async fn test_type_members_keeps_name_in_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/type/ice%2F..%2Ffire"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server)
        .type_members("ice/../fire")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_pokemon_not_found_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/0"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).pokemon(0).await.unwrap_err();
    assert!(err.is_upstream_unavailable());
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/type"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).list_types().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_upstream_unavailable());
}
