//! Servicio de rutas
//!
//! Capa de resolvers: cada operación del schema GraphQL lee o modifica el
//! store en memoria. Las mutaciones toman el lock de escritura durante toda
//! la operación, por lo que cada una es atómica.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::route::{Route, RouteInput};
use crate::repositories::route_store::RouteStore;
use crate::utils::errors::{not_found_error, AppResult};

/// Cantidad de rutas devueltas por `recommendRoutes`
const RECOMMENDED_COUNT: usize = 2;

/// Posición a partir de la cual empiezan las rutas de `popularRoutes`
const POPULAR_OFFSET: usize = 3;

#[derive(Clone, Default)]
pub struct RouteService {
    store: Arc<RwLock<RouteStore>>,
}

impl RouteService {
    pub fn new(store: RouteStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Buscar una ruta por id; la ausencia no es un error
    pub async fn route(&self, id: i32) -> Option<Route> {
        let store = self.store.read().await;
        let route = store.find_by_id(id).cloned();
        if route.is_none() {
            debug!("🔍 Ruta {} no encontrada", id);
        }
        route
    }

    /// Las dos primeras rutas en el orden del store
    pub async fn recommend_routes(&self) -> Vec<Route> {
        let store = self.store.read().await;
        store
            .all_routes()
            .iter()
            .take(RECOMMENDED_COUNT)
            .cloned()
            .collect()
    }

    /// Todas las rutas desde la cuarta posición en adelante
    pub async fn popular_routes(&self) -> Vec<Route> {
        let store = self.store.read().await;
        store
            .all_routes()
            .iter()
            .skip(POPULAR_OFFSET)
            .cloned()
            .collect()
    }

    pub async fn create_route(&self, input: RouteInput) -> AppResult<Route> {
        let mut store = self.store.write().await;
        let id = store.next_id().map_err(|e| {
            warn!("❌ createRoute: {}", e);
            e
        })?;
        if let Some(supplied) = input.id {
            debug!("Ignorando id {} enviado en createRoute", supplied);
        }

        let route = Route::from_input(id, input);
        store.append(route.clone());
        info!("✅ Ruta {} creada", id);
        Ok(route)
    }

    pub async fn update_route(&self, id: i32, input: RouteInput) -> AppResult<Route> {
        let mut store = self.store.write().await;
        let Some(existing) = store.find_by_id_mut(id) else {
            warn!("❌ updateRoute: no existe la ruta {}", id);
            return Err(not_found_error(id));
        };

        existing.merge(input);
        info!("✏️ Ruta {} actualizada", id);
        Ok(existing.clone())
    }

    pub async fn delete_route(&self, id: i32) -> AppResult<Route> {
        let mut store = self.store.write().await;
        let removed = store.remove_by_id(id).ok_or_else(|| {
            warn!("❌ deleteRoute: no existe la ruta {}", id);
            not_found_error(id)
        })?;

        info!("🗑️ Ruta {} eliminada", id);
        Ok(removed)
    }

    /// Número de rutas almacenadas
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}
