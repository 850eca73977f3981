//! Store error types.

use thiserror::Error;

/// Errors produced by snapshot encoding, decoding and backend I/O.
#[derive(Debug, Error)]
pub enum StoreError {
    /// JSON serialization or deserialization of the snapshot blob failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the snapshot backend failed.
    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),
}
