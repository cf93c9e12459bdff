//! Configuración del proyecto
//! 
//! Este módulo contiene las variables de entorno del servidor GraphQL.

pub mod environment;

pub use environment::*;
