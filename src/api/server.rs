//! API Server
//!
//! Listener setup, middleware stack and graceful shutdown.

use super::{
    errors::{ErrorResponse, INTERNAL_ERROR_MESSAGE},
    handlers::AppState,
    middleware::{create_cors_layer, request_id_middleware},
    routes::create_router,
};
use crate::{config::ServerConfig, errors::FruitSlotResult, slot::RandomSource};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::{any::Any, net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "fruit_slot=info,tower_http=info";

/// Initialize the global tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init();
}

/// Build the router with the full middleware stack
pub fn build_app(random: Arc<dyn RandomSource>, config: &ServerConfig) -> axum::Router {
    let state = Arc::new(AppState::new(random));
    with_middleware(create_router(state), config)
}

/// Wrap `router` in the service middleware, innermost first
pub fn with_middleware(router: axum::Router, config: &ServerConfig) -> axum::Router {
    router
        // Panics become the generic 500 body
        .layer(CatchPanicLayer::custom(handle_panic))
        // CORS answers preflights before they reach a handler
        .layer(create_cors_layer(config.allowed_origins.clone()))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        // Request ID outside CORS and timeout so their responses carry it too
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Log a handler panic and answer with the generic internal error
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", detail);

    let body = Json(ErrorResponse {
        error: INTERNAL_ERROR_MESSAGE.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

/// Fruit slot HTTP server
pub struct ApiServer {
    config: ServerConfig,
    random: Arc<dyn RandomSource>,
}

impl ApiServer {
    pub fn new(config: ServerConfig, random: Arc<dyn RandomSource>) -> Self {
        Self { config, random }
    }

    /// Bind the listener and serve until a shutdown signal arrives
    pub async fn run(self) -> FruitSlotResult<()> {
        let addr = self.socket_addr()?;
        let app = build_app(self.random.clone(), &self.config);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Starting server on http://{}", listener.local_addr()?);
        self.log_server_info();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped gracefully");
        Ok(())
    }

    fn socket_addr(&self) -> FruitSlotResult<SocketAddr> {
        let ip = self.config.host.parse::<std::net::IpAddr>().map_err(|_| {
            crate::errors::ConfigurationError::InvalidValue {
                field: "server.host".to_string(),
                value: self.config.host.clone(),
                reason: "Host must be an IP address".to_string(),
            }
        })?;
        Ok(SocketAddr::from((ip, self.config.port)))
    }

    fn log_server_info(&self) {
        info!("   Version: {}", env!("CARGO_PKG_VERSION"));
        info!("   CORS: {:?}", self.config.allowed_origins);
        info!("   Request timeout: {}s", self.config.request_timeout_secs);
        info!("   GET  /health   - Health check");
        info!("   GET  /play     - Single spin");
        info!("   GET  /play/10  - Ten spins");
    }
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}
