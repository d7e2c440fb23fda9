//! Classification client error types.

use reqwest::StatusCode;
use thiserror::Error;

pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Classification service returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Response contained no predictions")]
    EmptyPredictions,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
