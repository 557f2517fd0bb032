//! Error types for the terminal front end.

use thiserror::Error;

/// Errors that can surface from a CLI command.
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error writing to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The portfolio store could not be loaded or persisted.
    #[error("store error: {0}")]
    Store(#[from] marketmap_store::StoreError),

    /// A ticker not present in the market table.
    #[error("unknown ticker: {0}")]
    UnknownTicker(String),
}
