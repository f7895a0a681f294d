//! Error types for store operations.

use thiserror::Error;
use tokentree_canonical::Token;

/// Errors that can occur during store and cursor operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A requested token is absent from the backing reader.
    #[error("unknown token: {0}")]
    UnknownToken(Token),
    /// A cursor step named a key or index the structure does not have.
    #[error("no entry at {step} in the bound structure")]
    MissingKey {
        /// The key or index that was requested.
        step: String,
    },
    /// A cursor step landed on a value that is not a token string.
    #[error("value at {step} is not a token")]
    NotAToken {
        /// The key or index that was requested.
        step: String,
    },
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A persisted store document does not have the expected shape.
    #[error("malformed store document: {0}")]
    Format(String),
}
