//! Repositorios
//!
//! Acceso a los datos de rutas (store en memoria).

pub mod route_store;

pub use route_store::*;
