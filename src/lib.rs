pub mod compare;
pub mod direction;
pub mod ops;
pub mod precision;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Type Mismatch: unsupported operand dimensions for {operation}: {lhs} and {rhs}")]
    TypeMismatch {
        operation: &'static str,
        lhs: Dimension,
        rhs: Dimension,
    },
    #[error("Division By Zero: cannot {operation} a zero-magnitude vector")]
    DivisionByZero { operation: &'static str },
    #[error("Undefined Direction: {operation} is undefined for a zero-magnitude vector")]
    UndefinedDirection { operation: &'static str },
    #[error("Invalid Dimension: expected 2 or 3 components, got {0}")]
    InvalidDimension(usize),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use direction::Direction;
pub use precision::MAGNITUDE_PRECISION;
pub use utils::{cosine_similarity, euclidean_distance};
pub use vector::{Dimension, Vector};
