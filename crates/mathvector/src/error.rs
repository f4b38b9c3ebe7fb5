use std::error::Error;
use std::fmt;

use crate::math::Orientation;

/// Failures raised by vector construction and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The input layout is neither a single row nor a single column.
    InvalidShape {
        rows: usize,
        cols: usize, // Column count of the first row (0 when there are no rows)
        reason: &'static str,
    },
    /// Operands of a binary operation differ in orientation or length.
    IncompatibleOperands {
        lhs: (Orientation, usize),
        rhs: (Orientation, usize),
    },
    /// Normalization of a zero-magnitude vector.
    DivisionByZero,
}

impl VectorError {
    pub(crate) fn invalid_shape(rows: usize, cols: usize, reason: &'static str) -> Self {
        VectorError::InvalidShape { rows, cols, reason }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::InvalidShape { rows, cols, reason } => write!(
                f,
                "invalid vector shape ({} rows, {} columns): {}",
                rows, cols, reason
            ),
            VectorError::IncompatibleOperands { lhs, rhs } => write!(
                f,
                "incompatible operands: {} vector of length {} and {} vector of length {}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            VectorError::DivisionByZero => write!(f, "cannot normalize a zero vector"),
        }
    }
}

impl Error for VectorError {}

/// Result alias for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
