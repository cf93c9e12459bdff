//! Middleware de CORS
//! 
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS: cualquier origen, método y header.
/// La API es pública y no usa credenciales.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
