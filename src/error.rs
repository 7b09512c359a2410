use thiserror::Error;

/// Result type for tweet-sentiment operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Error::Artifact(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Error::Serialization(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create an inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Error::Inference(msg.into())
    }

    /// Create an other error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error must abort startup rather than fail a single request
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::Artifact(_) | Error::Serialization(_) | Error::Io(_)
        )
    }
}

/// Error context trait for adding context to errors
pub trait WithErrorContext {
    fn with_context(self, context: impl Into<String>) -> Self;
}

impl<T> WithErrorContext for Result<T> {
    fn with_context(self, context: impl Into<String>) -> Self {
        self.map_err(|e| {
            let context_str = context.into();
            match e {
                Error::Config(msg) => Error::Config(format!("{}: {}", context_str, msg)),
                Error::Artifact(msg) => Error::Artifact(format!("{}: {}", context_str, msg)),
                Error::Serialization(msg) => {
                    Error::Serialization(format!("{}: {}", context_str, msg))
                }
                Error::Validation(msg) => Error::Validation(format!("{}: {}", context_str, msg)),
                Error::Inference(msg) => Error::Inference(format!("{}: {}", context_str, msg)),
                Error::Other(msg) => Error::Other(format!("{}: {}", context_str, msg)),
                Error::Io(err) => Error::Io(std::io::Error::new(
                    err.kind(),
                    format!("{}: {}", context_str, err),
                )),
            }
        })
    }
}

/// Main error type for tweet-sentiment
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing, corrupt or inconsistent model artifacts
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Client input rejected before inference
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure during vectorization or classification
    #[error("Inference error: {0}")]
    Inference(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Artifact(format!("invalid token pattern: {}", err))
    }
}
