//! Error types for imgvault

use thiserror::Error;

/// Result type alias for imgvault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in imgvault operations
///
/// "Not found during deletion" is deliberately absent: removing a blob that
/// does not exist is a successful no-op, not an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid inline image encoding: {0}")]
    InvalidEncoding(String),

    #[error("source file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
