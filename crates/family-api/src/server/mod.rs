//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use family_common::{AppConfig, AppError};
use family_core::FamilyStructure;
use family_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize the seeded family store and create AppState
pub fn create_app_state(config: AppConfig) -> AppState {
    let family = FamilyStructure::new(config.family.last_name.clone());
    info!(
        last_name = %family.last_name(),
        members = family.member_count(),
        "Family store initialized"
    );

    let service_context = ServiceContext::new(family);
    AppState::new(service_context, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {e}", config.server.address())))?;

    // Create app state
    let state = create_app_state(config);

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
