/// Convenience result type used across Trellis.
pub type TrellisResult<T> = Result<T, TrellisError>;

/// Error taxonomy for the fallible edges of the engine.
///
/// Measuring and laying out content never fails; errors only come from
/// constructing values out of untrusted input (constraint bounds, documents,
/// environment values).
#[derive(thiserror::Error, Debug)]
pub enum TrellisError {
    /// Invalid user-provided bounds, attributes or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Environment value could not be stored or read back.
    #[error("environment error: {0}")]
    Environment(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrellisError {
    /// Build a [`TrellisError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrellisError::Environment`] value.
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }

    /// Build a [`TrellisError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TrellisError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
