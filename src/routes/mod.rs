//! Router HTTP de la aplicación
//!
//! Combina el endpoint GraphQL, el health check y las capas de CORS,
//! compresión y trazas.

pub mod graphql_routes;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo con su estado
pub fn create_app(state: AppState) -> Router {
    let graphql_path = state.config.graphql_path.clone();

    Router::new()
        .route("/health", get(health_check))
        .merge(graphql_routes::create_graphql_router(&graphql_path))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_middleware())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Health check simple
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "travel-routes-graphql",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "routes": state.routes.count().await,
    }))
}
