use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use navigation_server::planner::{PlannerConfig, TripPlanningEngine};
use navigation_server::profiles::InMemoryVehicleDirectory;
use navigation_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("NAVIGATION_HTTP_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let config = match std::env::var("PLANNER_CONFIG_PATH") {
        Ok(path) => {
            info!(%path, "loading planner config");
            PlannerConfig::from_json_file(&path)?
        }
        Err(_) => PlannerConfig::default(),
    };

    let vehicles = match std::env::var("VEHICLE_PROFILES_PATH") {
        Ok(path) => InMemoryVehicleDirectory::from_json_file(&path)?,
        Err(_) => {
            warn!("VEHICLE_PROFILES_PATH not set. Trip cost queries will return 404.");
            InMemoryVehicleDirectory::new()
        }
    };

    let state = AppState::new(TripPlanningEngine::new(config), vehicles);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "navigation planner listening");
    info!("  GET  /health     - Health check");
    info!("  GET  /trip       - Fuel cost per speed (?distance=<km>, x-user-email header)");
    info!("  POST /recommend  - Charging stop recommendations");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
