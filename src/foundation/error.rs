/// Result alias used across the crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// Crate error type.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Configuration or schedule rejected by `validate`.
    #[error("validation error: {0}")]
    Validation(String),

    /// The content document could not be fetched or parsed.
    #[error("load error: {0}")]
    Load(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
