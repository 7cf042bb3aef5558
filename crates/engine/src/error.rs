use hardtrack_core::error::CoreError;

/// Error type for engine operations.
///
/// Wraps [`CoreError`] for domain failures and `sqlx::Error` for storage
/// failures; the API layer maps both onto HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for engine return values.
pub type EngineResult<T> = Result<T, EngineError>;
