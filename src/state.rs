//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::graphql::schema::{build_schema, RouteSchema};
use crate::repositories::route_store::RouteStore;
use crate::services::route_service::RouteService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub routes: RouteService,
    pub schema: RouteSchema,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: RouteStore) -> Self {
        let routes = RouteService::new(store);
        Self {
            config,
            schema: build_schema(routes.clone()),
            routes,
        }
    }
}
