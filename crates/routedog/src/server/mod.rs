//! HTTP API.
//!
//! Routes:
//! - `GET /`, `GET /health`: liveness
//! - `POST /v1/addresses`: extract and geocode the addresses in an image
//! - `PUT /v1/geocode-address`: geocode one address

mod error;
mod handlers;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use routedog_core::config::ServerConfig;
use routedog_core::AddressService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// State shared by all handlers.
pub type AppState = Arc<AddressService>;

/// Build the API router.
pub fn router(service: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/v1/addresses", post(handlers::parse_addresses))
        .route("/v1/geocode-address", put(handlers::geocode_address))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(trace)
        .layer(cors)
        .with_state(service)
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, service: AddressService) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let app = router(Arc::new(service), config.max_body_bytes());

    tracing::info!(addr = %listener.local_addr()?, "Route.dog API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
