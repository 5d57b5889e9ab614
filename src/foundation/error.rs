/// Convenience result type used across shimmer.
pub type ShimmerResult<T> = Result<T, ShimmerError>;

/// Error taxonomy for the shimmer engine.
///
/// Only configuration entry points (setters, option loading, layout size) return errors to the
/// host. Allocation failures on the frame path are handled internally and degrade to drawing
/// content without shimmer.
#[derive(thiserror::Error, Debug)]
pub enum ShimmerError {
    /// A value outside its documented domain was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A surface or raster buffer could not be allocated.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Errors when serializing or deserializing options or content.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShimmerError {
    /// Build a [`ShimmerError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`ShimmerError::ResourceExhausted`] value.
    pub fn resource_exhausted(msg: impl Into<String>) -> Self {
        Self::ResourceExhausted(msg.into())
    }

    /// Build a [`ShimmerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came from a failed allocation.
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
