//! HTTP server mode for JSON access to the directory

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Aggregator;
use crate::error::{Error, Result};
use crate::query::BrowseQuery;
use crate::types::PokemonId;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    aggregator: Arc<Aggregator>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router for the directory endpoints
pub fn router(aggregator: Arc<Aggregator>) -> Router {
    let state = AppState { aggregator };

    // Build CORS layer - the directory is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/types", get(list_types))
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/:id", get(get_pokemon))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(aggregator: Arc<Aggregator>, port: u16) -> Result<()> {
    let app = router(aggregator);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Types available for filtering
async fn list_types(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let names = state.aggregator.list_type_names().await;
    (StatusCode::OK, Json(ApiResponse::success(names)))
}

/// One page of pokemon ids: `/pokemon?page=2&type=fire,flying`
async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let query = BrowseQuery::parse(
        params.get("page").map(String::as_str),
        params.get("type").map(String::as_str),
    );
    let result = state.aggregator.get_page(query.page, &query.types).await;
    (StatusCode::OK, Json(ApiResponse::success(result)))
}

/// Detail of one pokemon
async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PokemonId>,
) -> Response {
    match state.aggregator.pokemon(id).await {
        Some(pokemon) => (StatusCode::OK, Json(ApiResponse::success(pokemon))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(format!("Pokemon {id} not found"))),
        )
            .into_response(),
    }
}
