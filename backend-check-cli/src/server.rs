//! Server command - start the HTTP backend
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to backend-check-server crate)
//! - Level 4: logging setup

use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::Args;
use tracing_subscriber::EnvFilter;

use backend_check_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port number to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Turn off debug mode (verbose logs and request tracing)
    #[arg(long)]
    pub no_debug: bool,
}

impl ServerArgs {
    pub fn debug(&self) -> bool {
        !self.no_debug
    }
}

impl Default for ServerArgs {
    fn default() -> Self {
        let config = ServerConfig::default();
        Self {
            host: config.host,
            port: config.port,
            no_debug: !config.debug,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args);

    tracing::info!(
        "Starting backend check server on {} (debug: {})",
        config.addr(),
        config.debug
    );

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> ServerConfig {
    ServerConfig {
        host: args.host,
        port: args.port,
        debug: args.debug(),
    }
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let addr = config.addr();

    // Create tokio runtime for async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime
        .block_on(run_server(config))
        .with_context(|| format!("backend check server on {} stopped", addr))
}

// ============================================================================
// LEVEL 4 - LOGGING
// ============================================================================

/// Default log directive when RUST_LOG is unset
fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber. RUST_LOG overrides the default.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// ============================================================================
// TESTS
// ============================================================================
