/// Convenience result type used across spiralgif.
pub type SpiralResult<T> = Result<T, SpiralError>;

/// Top-level error taxonomy used by the generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpiralError {
    /// Invalid configuration or generator input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while serializing frames into the animation container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpiralError {
    /// Build a [`SpiralError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpiralError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
