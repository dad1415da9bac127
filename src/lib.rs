//! Logbook - a small file-backed todo service.
//!
//! This library provides the core functionality for the `logbook` CLI tool:
//! the todo data model, the operations over the in-memory collection, the
//! storage layer, and the HTTP server.

pub mod cli;
pub mod collection;
pub mod models;
pub mod server;
pub mod store;

/// Library-level error type for logbook operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("todo {0} not found")]
    NotFound(u64),

    #[error("{0}")]
    InvalidInput(String),
}

/// Result type alias for logbook operations.
pub type Result<T> = std::result::Result<T, Error>;
