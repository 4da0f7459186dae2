//! Classified API errors.

use std::fmt;

use crate::code::ResponseCode;

/// Classification of an envelope code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `020`.
    BillerConfirmed,
    /// `011`.
    InvalidArguments,
    /// `012`.
    ProductDoesNotExist,
    /// `030`.
    BillerNotReachable,
    /// Any code outside the documented set.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BillerConfirmed => "biller_confirmed",
            Self::InvalidArguments => "invalid_arguments",
            Self::ProductDoesNotExist => "product_does_not_exist",
            Self::BillerNotReachable => "biller_not_reachable",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Error returned when the API answers with a non-200 status.
///
/// `message` is display text only and is empty for unknown codes; branch on
/// `kind` or `code` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Classified kind.
    pub kind: ErrorKind,
    /// The envelope code as received.
    pub code: String,
    /// Fixed human-readable message, possibly empty.
    pub message: String,
}

impl ApiError {
    /// Classify an envelope code into an error.
    #[must_use]
    pub fn from_code(code: &ResponseCode) -> Self {
        let (kind, message) = code.classify();
        Self {
            kind,
            code: code.as_str().to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_carries_kind_code_and_message() {
        let err = ApiError::from_code(&ResponseCode::new("030"));
        assert_eq!(err.kind, ErrorKind::BillerNotReachable);
        assert_eq!(err.code, "030");
        assert_eq!(err.to_string(), "BILLER NOT REACHABLE AT THIS POINT");
    }

    #[test]
    fn unknown_code_displays_empty_message() {
        let err = ApiError::from_code(&ResponseCode::new("099"));
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.code, "099");
        assert_eq!(err.message, "");
        assert_eq!(err.to_string(), "");
    }
}
