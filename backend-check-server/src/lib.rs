//! Backend check server - HTTP API
//!
//! This crate provides the web backend:
//! - `GET /api/test` liveness message
//! - Two-step startup: bind, then serve

mod config;
mod error;
mod routes;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::test::{TestResponse, TEST_MESSAGE};

/// Create the router with all routes
pub fn create_router(config: &ServerConfig) -> Router {
    let router = Router::new().route("/api/test", get(routes::test::test_handler));

    // Per-request spans only in debug mode
    if config.debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// A server that has not bound its socket yet
pub struct Server {
    config: ServerConfig,
}

/// A server holding a bound listener, ready to accept connections
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
    debug: bool,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the configured address.
    ///
    /// Fails with [`ServerError::Bind`] if the address is already in use
    /// or cannot be assigned.
    pub async fn bind(self) -> Result<BoundServer, ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(BoundServer {
            listener,
            router: create_router(&self.config),
            debug: self.config.debug,
        })
    }
}

impl BoundServer {
    /// Address actually bound (resolves port 0 to the assigned port)
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::Serve)
    }

    /// Accept connections until the process exits
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr = self.local_addr()?;
        tracing::info!("Backend check server listening on http://{}", addr);
        if self.debug {
            tracing::info!("Debug mode is on");
        }

        axum::serve(self.listener, self.router)
            .await
            .map_err(ServerError::Serve)
    }
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    Server::new(config).bind().await?.serve().await
}
