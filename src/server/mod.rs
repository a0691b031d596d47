//! HTTP API.
//!
//! Routes:
//! - POST /api/pseudo/load - Parse a pseudo-file into levels and sections
//! - GET /api/test/ping - Liveness check
//! - POST /api/test/echo - Echo the JSON body back
//! - POST /api/debug/breakpoint - Acknowledge a breakpoint (no debugger behind it)
//!
//! The router holds no state; every request is parsed independently.

use crate::config::ResolvedConfig;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod envelope;
pub mod handlers;

/// Build the router.
///
/// `cors` applies a permissive CORS layer to every route.
pub fn create_router(cors: bool) -> Router {
    let router = Router::new()
        .route("/api/pseudo/load", post(handlers::load_pseudo_file))
        .route("/api/test/ping", get(handlers::ping))
        .route("/api/test/echo", post(handlers::echo))
        .route("/api/debug/breakpoint", post(handlers::set_breakpoint));

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

/// Bind to the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns the I/O error if binding or serving fails.
pub async fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let app = create_router(config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        debug = config.debug,
        cors = config.cors,
        "Starting pseudolens server"
    );

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
            // Without a signal handler the server can only be killed.
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
