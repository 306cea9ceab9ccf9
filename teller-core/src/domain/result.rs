//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every variant except `Io` is an expected, user-facing condition that
/// aborts the current operation and returns control to the caller. `Io`
/// implies the persisted state may be unreliable and is the only kind worth
/// escalating past the operation boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("insufficient funds: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds { balance: f64, requested: f64 },

    #[error("authentication failed for account {0}")]
    AuthenticationFailed(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed")]
    InputExhausted,
}

impl Error {
    /// Create an out-of-range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
