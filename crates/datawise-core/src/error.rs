use thiserror::Error;

/// Top-level error type for the DataWise service.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for DatawiseError` so that `?` works across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatawiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset load error: {0}")]
    DatasetLoad(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DatawiseError {
    fn from(err: toml::de::Error) -> Self {
        DatawiseError::Config(err.to_string())
    }
}

/// A specialized `Result` type for DataWise operations.
pub type Result<T> = std::result::Result<T, DatawiseError>;
