//! Shared error type for all transforms
//!
//! Every fallible transform in this crate reports failures through
//! [`TransformError`]. Errors are raised synchronously to the caller;
//! no transform returns a partial result alongside an error.

use thiserror::Error;

/// Errors raised by the transform functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An out-of-domain scalar input was supplied by the caller
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the violated precondition
        reason: String,
    },
    /// A computed square does not fit in the target integer width
    #[error("arithmetic overflow: {base}^2 exceeds i32::MAX")]
    ArithmeticOverflow {
        /// The value whose square overflowed
        base: i32,
    },
}

impl TransformError {
    /// Shorthand for [`TransformError::InvalidArgument`] with a formatted reason
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
