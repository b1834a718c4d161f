use thiserror::Error;

use datawise_core::DatawiseError;

/// Errors raised while materializing a [`crate::SalesStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("dataset not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Malformed(String),
    #[error("record {index}: sales value {value:?} is not a non-negative number")]
    InvalidSales { index: usize, value: String },
    #[error("record {index}: date {value:?} is not an ISO-8601 date")]
    InvalidDate { index: usize, value: String },
}

impl From<StoreError> for DatawiseError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(io) => DatawiseError::Io(io),
            other => DatawiseError::DatasetLoad(other.to_string()),
        }
    }
}
