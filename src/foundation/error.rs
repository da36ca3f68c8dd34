/// Crate-wide result alias.
pub type FramepressResult<T> = Result<T, FramepressError>;

/// Error kinds surfaced by the conversion pipeline.
///
/// Every variant carries a human-readable message; nothing is retried
/// internally and no error is silently swallowed.
#[derive(thiserror::Error, Debug)]
pub enum FramepressError {
    /// The animation document could not be parsed or validated.
    #[error("load error: {0}")]
    Load(String),

    /// The requested frame index is at or past the document's frame count.
    #[error("frame range error: {0}")]
    FrameRange(String),

    /// A pixel buffer or sink allocation failed.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// The PNG encoder failed, including sink growth failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Requested output dimensions are outside the accepted range.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Requested quality is outside the accepted range.
    #[error("invalid quality: {0}")]
    InvalidQuality(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramepressError {
    /// Build a [`FramepressError::Load`].
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`FramepressError::FrameRange`].
    pub fn frame_range(msg: impl Into<String>) -> Self {
        Self::FrameRange(msg.into())
    }

    /// Build a [`FramepressError::Allocation`].
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`FramepressError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FramepressError::InvalidDimensions`].
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`FramepressError::InvalidQuality`].
    pub fn invalid_quality(msg: impl Into<String>) -> Self {
        Self::InvalidQuality(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
