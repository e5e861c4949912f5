use thiserror::Error;

/// Failure surface of the crate.
///
/// Every fallible operation on [`SquareMat`](crate::matrix::square::SquareMat)
/// reports one of these two precondition violations. Validation always runs
/// before any mutation, so a failed in-place operation leaves its receiver
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareMatError {
    /// Zero construction order, malformed row input, zero divisor or
    /// modulus, negative exponent, or mismatched orders in a binary
    /// matrix operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Row or column index past the matrix order.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
}
