//! Axum server setup
//!
//! Server skeleton with:
//! - CORS limited to the site origin by default
//! - Tracing middleware
//! - Request timeouts: a 408 layer on content routes; registration enforces
//!   its own and answers `{"success": false}`
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use nuryanti_core::config::DEFAULT_SITE_ORIGIN;
use nuryanti_core::{ContentStore, Registrar};

use super::error::ApiError;
use super::routes;
use crate::error::{Result, ServerError};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Origin allowed by CORS (the public site)
    pub site_origin: String,

    /// Allow permissive CORS (default: false = site origin only)
    ///
    /// WARNING: Setting this to true allows any origin.
    /// Only use for development.
    pub cors_permissive: bool,

    /// Per-request timeout. Also bounds the whole registration pipeline.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            site_origin: DEFAULT_SITE_ORIGIN.to_owned(),
            cors_permissive: false,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Shared application state, built once at startup
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub registrar: Registrar,
    /// Set from [`ServerConfig::request_timeout`] by [`build_router`]
    pub(crate) registration_timeout: Duration,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentStore>, registrar: Registrar) -> Self {
        Self {
            content,
            registrar,
            registration_timeout: ServerConfig::default().request_timeout,
        }
    }
}

/// Build the router with all routes and middleware.
pub fn build_router(mut state: AppState, config: &ServerConfig) -> Result<Router> {
    state.registration_timeout = config.request_timeout;

    // CORS configuration
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let origin: HeaderValue = config
            .site_origin
            .parse()
            .map_err(|_| ServerError::InvalidOrigin(config.site_origin.clone()))?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    Ok(Router::new()
        .merge(routes::health::router())
        .merge(routes::content::router().layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        )))
        .merge(routes::register::router())
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(content, registrar);
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<()> {
    let app = build_router(state, &config)?;

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
