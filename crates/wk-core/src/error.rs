/// Alias for `Result<T, WkError>`.
pub type WkResult<T> = Result<T, WkError>;

/// Errors shared by the roller, the mapper, and the settings layer.
#[derive(Debug, thiserror::Error)]
pub enum WkError {
    /// The secure random source could not produce entropy.
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// An argument was outside its defined domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The settings store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl WkError {
    /// Shorthand for building an [`WkError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
