//! Backend check CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP server (the default when no command is given)

mod server;

use clap::{Parser, Subcommand};

use server::ServerArgs;

#[derive(Parser)]
#[command(name = "backend-check")]
#[command(about = "Minimal HTTP backend answering GET /api/test")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(ServerArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = match cli.command {
        Some(Commands::Serve(args)) => args,
        None => ServerArgs::default(),
    };

    // Initialize logging
    server::init_tracing(args.debug());

    server::run(args)
}
