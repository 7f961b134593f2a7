//! Rewards Ledger Command Line Interface
//!
//! Usage:
//!   rewards serve    - Start the rewards API server

use clap::{Parser, Subcommand};
use rewards_api::{run_server, ApiConfig};

#[derive(Parser)]
#[command(name = "rewards")]
#[command(about = "Single-account reward-points ledger service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the rewards API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Disable CORS headers
        #[arg(long)]
        no_cors: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
            };
            run_server(config).await
        }
    }
}
