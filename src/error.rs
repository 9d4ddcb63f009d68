use thiserror::Error;

/// Errors raised by range construction, conversion and rendering.
///
/// Every variant is a contract violation detected at the call site. Empty
/// ranges and undefined distances are ordinary values, never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range values must be positive, got {0}")]
    InvalidValue(i64),

    #[error("Unsupported operand: {0}")]
    InvalidOperand(String),

    #[error("Invalid display bound: {reason}")]
    InvalidBound { reason: String },

    #[error("Piece index {index} out of range for a set of {len} pieces")]
    IndexOutOfRange { index: usize, len: usize },

    /// A positional operation would move a value past `i64::MAX`.
    #[error("Integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl RangeError {
    pub(crate) fn bound(reason: impl Into<String>) -> Self {
        RangeError::InvalidBound {
            reason: reason.into(),
        }
    }
}
