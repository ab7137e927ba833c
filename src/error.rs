use std::result;

use arrow::error::ArrowError;
use thiserror::Error;
pub type Result<T> = result::Result<T, CreditGenError>;

#[derive(Error, Debug)]
pub enum CreditGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("InvalidProbability: {0:?}")]
    InvalidProbability(f64),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] ArrowError),
}
