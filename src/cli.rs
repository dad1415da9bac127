//! CLI argument definitions for logbook.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Logbook - a small HTTP service for tracking todos in a flat JSON file.
#[derive(Parser, Debug)]
#[command(name = "logbook")]
#[command(author, version, about = "A file-backed todo API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the todo API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "LOGBOOK_PORT", default_value = "5000")]
        port: u16,

        /// Host address to bind to (default: 127.0.0.1, use 0.0.0.0 for network access)
        #[arg(long, env = "LOGBOOK_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Path of the JSON file holding the todo collection
        #[arg(long, env = "LOGBOOK_DATA_FILE", default_value = "todos.json")]
        data_file: PathBuf,
    },
}
