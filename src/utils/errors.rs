//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a errores GraphQL apropiados.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No route exists with id {id}")]
    NotFound { id: i32 },

    #[error("Route ids exhausted: last assigned id is {last_id}")]
    IdsExhausted { last_id: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

impl AppError {
    /// Código estable expuesto en `extensions.code`
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::IdsExhausted { .. } => "IDS_EXHAUSTED",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Seed(_) => "SEED_ERROR",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let AppError::NotFound { id } = self {
                e.set("id", *id);
            }
        })
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(id: i32) -> AppError {
    AppError::NotFound { id }
}

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, value: &str) -> AppError {
    AppError::Config(format!("{} has an invalid value '{}'", variable, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let error = not_found_error(42);
        assert_eq!(error.to_string(), "No route exists with id 42");
        assert_eq!(error.code(), "NOT_FOUND");
    }

    #[test]
    fn test_not_found_extensions() {
        let gql_error = not_found_error(7).extend();
        assert_eq!(gql_error.message, "No route exists with id 7");

        let extensions = serde_json::to_value(gql_error.extensions.expect("extensions")).unwrap();
        assert_eq!(extensions["code"], "NOT_FOUND");
        assert_eq!(extensions["id"], 7);
    }

    #[test]
    fn test_ids_exhausted_code() {
        let gql_error = AppError::IdsExhausted { last_id: i32::MAX }.extend();
        let extensions = serde_json::to_value(gql_error.extensions.expect("extensions")).unwrap();
        assert_eq!(extensions["code"], "IDS_EXHAUSTED");
        assert!(extensions.get("id").is_none());
    }

    #[test]
    fn test_config_error_message() {
        let error = config_error("PORT", "abc");
        assert_eq!(error.to_string(), "Configuration error: PORT has an invalid value 'abc'");
    }
}
