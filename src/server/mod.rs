pub mod handlers;
pub mod types;

use crate::{Result, bootstrap, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the HTTP surface. CORS mirrors the caller's origin, method and
/// headers so credentialed requests from any origin are accepted. Request
/// bodies are not size-limited; symptom text of any length is forwarded.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze_symptoms/", post(handlers::analyze_symptoms))
        .route("/analyze_symptoms", post(handlers::analyze_symptoms))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = bootstrap::init_llm_client(&config.llm);

    let app_state = AppState::new(llm_client);
    if !app_state.analyzer.is_available() {
        warn!("Serving without an LLM client; analysis requests will fail");
    }

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
