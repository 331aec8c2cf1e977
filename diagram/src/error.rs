//! Error taxonomy for the diagram core.
//!
//! Both variants are fatal to the operation that raised them: a renderer is
//! either constructed whole or not at all. Numeric degeneracy (normalizing a
//! zero-length vector, centering an empty vertex list) is not an error; it
//! yields NaN coordinates that propagate into the frame.

/// Failures raised by fragment generation and renderer construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The drawing backend could not be acquired.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// An argument or a generated piece of geometry was out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DiagramError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
