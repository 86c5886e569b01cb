/// Convenience result type used across bloomcard.
pub type BloomResult<T> = Result<T, BloomError>;

/// Top-level error taxonomy used by the composer APIs.
#[derive(thiserror::Error, Debug)]
pub enum BloomError {
    /// Invalid constants or user-provided values (colors, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Source images or fonts that could not be decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Pixel buffer or surface invariants violated while drawing.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BloomError {
    /// Build a [`BloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BloomError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`BloomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BloomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
