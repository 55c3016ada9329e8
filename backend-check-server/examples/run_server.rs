//! Example to run the backend check server standalone
//!
//! Run with: cargo run -p backend-check-server --example run_server

use backend_check_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting backend check server on {}", config.addr());
    println!("Try: curl http://{}/api/test", config.addr());

    run_server(config).await?;
    Ok(())
}
