//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: los resolvers
//! de las operaciones GraphQL sobre rutas.

pub mod route_service;

pub use route_service::*;
