//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the content handler
//! - Register the auto-close middleware into the access phase
//! - Bind the server to a listener and serve with graceful shutdown
//!
//! The auto-close policy is registered exactly once, at router build time.
//! Per-request work happens only inside the middleware itself.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    response::IntoResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ScopeTree};
use crate::http::middleware::{autoclose_middleware, AutoCloseState};
use crate::routing::ScopeRouter;

/// HTTP host server with the auto-close policy wired in.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from a resolved scope tree.
    pub fn new(tree: ScopeTree) -> Self {
        Self {
            router: build_router(tree),
        }
    }

    /// Create a server directly from raw configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ScopeTree::resolve(config))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with the auto-close middleware registered.
pub fn build_router(tree: ScopeTree) -> Router {
    let state = AutoCloseState {
        scopes: Arc::new(ScopeRouter::new(tree)),
    };

    Router::new()
        .route("/{*path}", any(content_handler))
        .route("/", any(content_handler))
        .layer(middleware::from_fn_with_state(state, autoclose_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Placeholder content handler: acknowledges the requested path.
///
/// A real deployment serves actual content here; the auto-close policy is
/// indifferent to what the handler produces.
async fn content_handler(req: Request<Body>) -> impl IntoResponse {
    (StatusCode::OK, format!("serving {}", req.uri().path()))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
