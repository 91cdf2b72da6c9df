use std::result;

use thiserror::Error;

/// Error types for Europe PMC lookups
#[derive(Error, Debug)]
pub enum LitQueryError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Search service answered with a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Writing the report failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Environment override could not be used
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = result::Result<T, LitQueryError>;
