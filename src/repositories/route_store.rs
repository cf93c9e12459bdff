//! Store en memoria de rutas
//!
//! Secuencia ordenada de rutas más el contador de ids. No hay persistencia:
//! el estado se pierde al reiniciar el proceso.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::models::route::Route;
use crate::utils::errors::{AppError, AppResult};

/// Documento de datos iniciales (`{ "routes": [...], "lastId": n }`)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub routes: Vec<Route>,
    pub last_id: Option<i32>,
}

#[derive(Debug, Default)]
pub struct RouteStore {
    routes: Vec<Route>,
    last_id: i32,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear un store a partir de datos iniciales.
    ///
    /// `lastId` nunca queda por debajo del id más alto sembrado, así los ids
    /// nuevos siguen siendo únicos.
    pub fn from_seed(seed: SeedData) -> Self {
        let max_id = seed.routes.iter().map(|r| r.id).max().unwrap_or(0);
        let last_id = seed.last_id.unwrap_or(max_id).max(max_id);
        Self {
            routes: seed.routes,
            last_id,
        }
    }

    /// Cargar los datos iniciales desde un archivo JSON
    pub fn load_seed_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        let store = Self::from_seed(seed);
        info!(
            "🌱 {} rutas cargadas desde {} (lastId = {})",
            store.len(),
            path.display(),
            store.last_id
        );
        Ok(store)
    }

    pub fn all_routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn find_by_id(&self, id: i32) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: i32) -> Option<&mut Route> {
        self.routes.iter_mut().find(|r| r.id == id)
    }

    /// Agregar al final; el id ya debe estar asignado
    pub fn append(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn remove_by_id(&mut self, id: i32) -> Option<Route> {
        let index = self.routes.iter().position(|r| r.id == id)?;
        Some(self.routes.remove(index))
    }

    /// Siguiente id; falla si el contador ya llegó a `i32::MAX`
    pub fn next_id(&mut self) -> AppResult<i32> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or(AppError::IdsExhausted { last_id: self.last_id })?;
        self.last_id = next;
        Ok(next)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
