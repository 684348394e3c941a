//! Error types for the NestKV engine.

use thiserror::Error;

/// Result type for engine operations.
pub type CoreResult<T> = Result<T, EngineError>;

/// Conditions surfaced by the engine.
///
/// Both conditions are recoverable: the caller reports them and the session
/// continues. Neither leaves the engine in a partially applied state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// COMMIT or ROLLBACK was issued while no transaction was open.
    #[error("NotInTransaction")]
    NotInTransaction,

    /// Top-level UNSET named a key absent from committed state.
    #[error("Var {key} not found")]
    UnknownKey {
        /// The key that was not found.
        key: String,
    },
}

impl EngineError {
    /// Creates an unknown-key error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}
