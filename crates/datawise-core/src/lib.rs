pub mod config;
pub mod error;
pub mod types;

pub use config::DatawiseConfig;
pub use error::{DatawiseError, Result};
pub use types::*;
