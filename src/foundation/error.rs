/// Convenience result type used across vectorgrid.
pub type VectorGridResult<T> = Result<T, VectorGridError>;

/// Top-level error taxonomy used by engine and layout APIs.
///
/// Most of these never escape the frame loop: the animation engine and the layout
/// generator turn them into logged fallbacks. They surface directly from
/// configuration loading and from the lower-level building blocks.
#[derive(thiserror::Error, Debug)]
pub enum VectorGridError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation implementation failed while producing a frame.
    #[error("animation error: {0}")]
    Animation(String),

    /// The requested animation id is not known to the registry.
    #[error("unknown animation '{0}'")]
    UnknownAnimation(String),

    /// Errors while generating a point layout.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VectorGridError {
    /// Build a [`VectorGridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VectorGridError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`VectorGridError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`VectorGridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VectorGridError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
