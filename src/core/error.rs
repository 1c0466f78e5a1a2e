//! Error types and handling for the dice MCP server.
//!
//! This module defines a unified error type over the failures the server can
//! actually hit: dice input validation, transport I/O, and JSON
//! (de)serialization.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the dice MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the dice domain (parsing, validation).
    #[error("Dice error: {0}")]
    Dice(#[from] crate::domains::dice::DiceError),

    /// I/O errors from transport communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
