//! Error types for RUT operations.
//!
//! Malformed input is the only failure mode of the library. A well-formed
//! RUT whose check digit does not match its body is a normal negative
//! result, never an error.

use thiserror::Error;

/// Result type alias for RUT operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for RUT operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a RUT (or as a RUT body).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the input was rejected.
        reason: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] from any displayable reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
