//! Upstream trait and the PokéAPI client

use super::types::{NamedResourceList, Pokemon, TypeDetail};
use crate::config::AppConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::PokemonId;
use async_trait::async_trait;

/// Public PokéAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Read-only access to the upstream catalog.
///
/// Every method fails with an upstream-unavailable error
/// ([`crate::Error::is_upstream_unavailable`]) when the call cannot complete
/// or returns a non-success status.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// `GET /type` - every type category
    async fn list_types(&self) -> Result<NamedResourceList>;

    /// `GET /type/{name}` - a type and all of its member pokemon
    async fn type_members(&self, type_name: &str) -> Result<TypeDetail>;

    /// `GET /pokemon?limit=&offset=` - one page of the native listing
    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<NamedResourceList>;

    /// `GET /pokemon/{id}` - full detail of one pokemon
    async fn pokemon(&self, id: PokemonId) -> Result<Pokemon>;
}

/// [`Upstream`] implementation backed by the PokéAPI REST service
#[derive(Debug)]
pub struct PokeApiClient {
    http: HttpClient,
}

impl PokeApiClient {
    /// Create a client over an already configured HTTP client.
    ///
    /// The HTTP client's base URL must point at the API root
    /// (e.g. [`DEFAULT_BASE_URL`]).
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a client from application config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(http))
    }
}

#[async_trait]
impl Upstream for PokeApiClient {
    async fn list_types(&self) -> Result<NamedResourceList> {
        self.http.get_json(self.http.endpoint(&["type"])?).await
    }

    async fn type_members(&self, type_name: &str) -> Result<TypeDetail> {
        // The name is user input; it must stay a single path segment
        self.http
            .get_json(self.http.endpoint(&["type", type_name])?)
            .await
    }

    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<NamedResourceList> {
        let mut url = self.http.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        self.http.get_json(url).await
    }

    async fn pokemon(&self, id: PokemonId) -> Result<Pokemon> {
        let id = id.to_string();
        self.http.get_json(self.http.endpoint(&["pokemon", &id])?).await
    }
}
