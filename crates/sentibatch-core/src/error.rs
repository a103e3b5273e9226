//! Error types for SentiBatch

/// Result type alias using SentiBatch's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SentiBatch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural input errors (missing file, missing column, malformed JSON)
    #[error("input error: {0}")]
    Input(String),

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Metrics computation errors
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV parsing/writing errors
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new metrics error
    pub fn metrics(msg: impl Into<String>) -> Self {
        Self::Metrics(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for structural input errors, which are batch-fatal.
    ///
    /// Everything else is recovered per-record or by omitting the
    /// metrics block.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Io(_) | Self::Csv(_))
    }
}
