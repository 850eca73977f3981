//! API error taxonomy.
//!
//! Business-rule and not-found failures are returned to the immediate caller;
//! snapshot write failures never surface here (they are absorbed and logged
//! at the store boundary, since the in-memory mutation already succeeded).

use thiserror::Error;

use crate::route::Method;

/// Errors surfaced by the dispatch layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// PUT/DELETE target id does not exist in the addressed collection.
    #[error("item not found: {resource}/{id}")]
    ItemNotFound { resource: &'static str, id: i64 },

    /// A business rule rejected the operation; the reason is user-facing.
    #[error("{0}")]
    InvalidOperation(String),

    /// Login failed: no user with that username.
    #[error("Username tidak ditemukan.")]
    UnknownUsername,

    /// Login failed: the username exists but the password does not match.
    #[error("Password yang Anda masukkan salah.")]
    WrongPassword,

    /// No route matches the path/verb pair. A caller/core contract mismatch,
    /// raised rather than silently ignored.
    #[error("unknown endpoint or method: {method} {path}")]
    UnknownEndpoint { method: Method, path: String },

    /// The request body could not be interpreted for the addressed record.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A value failed to (de)serialize inside the dispatch itself.
    #[error("internal error: {0}")]
    Internal(String),
}
