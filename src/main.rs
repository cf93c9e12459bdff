use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use travel_routes::config::environment::EnvironmentConfig;
use travel_routes::repositories::route_store::RouteStore;
use travel_routes::routes::create_app;
use travel_routes::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🧭 Travel Routes - API GraphQL");
    info!("================================================");
    info!("⚙️ Entorno: {}", config.environment);

    // Inicializar store en memoria
    let store = match &config.seed_file {
        Some(path) => match RouteStore::load_seed_file(path) {
            Ok(store) => store,
            Err(e) => {
                error!("❌ Error cargando datos iniciales: {}", e);
                return Err(anyhow::anyhow!("Error de datos iniciales: {}", e));
            }
        },
        None => {
            info!("📭 Sin ROUTES_SEED_FILE, el store empieza vacío");
            RouteStore::new()
        }
    };

    let addr = config.socket_addr()?;
    let graphql_path = config.graphql_path.clone();
    let app = create_app(AppState::new(config, store));

    info!("🌐 Running a GraphQL API server at http://localhost:{}{}", addr.port(), graphql_path);
    info!("🔍 Endpoints disponibles:");
    info!("   POST {} - Ejecutar queries y mutaciones", graphql_path);
    info!("   GET  {} - GraphiQL / queries por query string", graphql_path);
    info!("   GET  /health - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
