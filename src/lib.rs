pub mod binary;
pub mod text;
pub mod value;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    #[error("expected ndim to be 1, got ndim {0}")]
    Dimensionality(usize),
    #[error("dtype must be numeric, got {0}")]
    NumericType(&'static str),
    #[error("expected {expected} dimensions, not {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("invalid vector payload: {0}")]
    Parse(String),
    #[error("binary vector truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("{0} dimensions do not fit the u16 wire header")]
    DimensionOverflow(usize),
}

pub type Result<T> = std::result::Result<T, WireError>;

// Re-export main types for convenience
pub use binary::{decode_binary, encode_binary};
pub use text::{decode_text, encode_text};
pub use value::{Scalar, VectorValue};
