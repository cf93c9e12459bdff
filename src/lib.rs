//! API GraphQL de rutas de viaje
//!
//! CRUD sobre una lista en memoria de rutas (itinerarios) con sus paradas.

pub mod config;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
