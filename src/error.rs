use thiserror::Error;

use crate::base62::DecodeError;

/// Represents errors that can occur during KSUID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KsuidError {
    /// Input is not a well-formed KSUID (length, alphabet, or timestamp)
    #[error("Invalid KSUID format: {reason}")]
    InvalidFormat { reason: String },
    /// Input decodes to a value wider than a raw KSUID
    #[error("KSUID value needs {len} bytes. Maximum allowed is 20")]
    ValueTooLarge { len: usize },
}

impl KsuidError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Returns true if the input was malformed
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns true if the input was well-formed but numerically too large
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::ValueTooLarge { .. })
    }
}

impl From<DecodeError> for KsuidError {
    fn from(err: DecodeError) -> Self {
        Self::invalid_format(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KsuidError>;
