//! Endpoint GraphQL
//!
//! `POST` ejecuta documentos GraphQL. `GET` con parámetro `query` ejecuta
//! solo queries; sin `query` devuelve el IDE GraphiQL.

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::types::OperationType;
use async_graphql::ServerError;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::AppState;

pub fn create_graphql_router(path: &str) -> Router<AppState> {
    Router::new().route(path, get(graphql_get).post(graphql_post))
}

/// Solo interesa saber si la petición `GET` trae un documento
#[derive(Debug, Default, Deserialize)]
pub struct GraphQLGetParams {
    pub query: Option<String>,
}

async fn graphql_post(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    debug!("📨 POST GraphQL: {:?}", request.operation_name);
    state.schema.execute(request).await.into()
}

async fn graphql_get(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<GraphQLGetParams>,
    request: Option<GraphQLRequest>,
) -> Response {
    let has_query = params.query.is_some_and(|q| !q.trim().is_empty());
    let request = match request {
        Some(request) if has_query => request.into_inner(),
        Some(_) => return graphiql(&uri).into_response(),
        None if has_query => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid GraphQL request parameters.")
        }
        None => return graphiql(&uri).into_response(),
    };

    if contains_mutation(&request.query, request.operation_name.as_deref()) {
        warn!("❌ Mutación rechazada en petición GET");
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

/// Página GraphiQL apuntando al mismo path del endpoint
fn graphiql(uri: &Uri) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(uri.path()).finish())
}

/// Indica si la operación a ejecutar es una mutación.
///
/// Un documento que no parsea se deja pasar: el executor reporta el error.
fn contains_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = async_graphql::parser::parse_query(query) else {
        return false;
    };

    document.operations.iter().any(|(name, operation)| {
        let selected = match operation_name {
            Some(wanted) => name.map(|n| n.as_str()) == Some(wanted),
            None => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (status, GraphQLResponse::from(body)).into_response()
}
