//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::utils::errors::{config_error, AppResult};

/// Puerto por defecto del servidor GraphQL
pub const DEFAULT_PORT: u16 = 4000;

/// Ruta por defecto del endpoint GraphQL
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub graphql_path: String,
    pub seed_file: Option<PathBuf>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            seed_file: None,
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| config_error("PORT", &raw))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| config_error("LOG_LEVEL", &raw))?,
            None => defaults.log_level,
        };

        let graphql_path = match lookup("GRAPHQL_PATH") {
            Some(raw) if raw.starts_with('/') => raw,
            Some(raw) => return Err(config_error("GRAPHQL_PATH", &raw)),
            None => defaults.graphql_path,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            graphql_path,
            seed_file: lookup("ROUTES_SEED_FILE").map(PathBuf::from),
            log_level,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Dirección de escucha del servidor
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let url = self.server_url();
        url.parse().map_err(|_| config_error("HOST", &self.host))
    }
}
