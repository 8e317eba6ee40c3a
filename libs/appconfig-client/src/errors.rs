//! Error type for remote API calls

use thiserror::Error;

/// Error returned by any remote API operation
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
}
