//! Logbook CLI - a file-backed todo API server.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use logbook::cli::{Cli, Commands};
use logbook::server;
use logbook::store::FileStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            host,
            data_file,
        } => server::start_server(Box::new(FileStore::new(data_file)), &host, port).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
