//! Envelope response codes and their classification.
//!
//! VTpass reports outcomes through a `code` field on every envelope. Most
//! endpoints send it as a string (`"011"`), the balance endpoint sends a
//! number. [`ResponseCode`] accepts both and always compares as a string.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::ErrorKind;

/// The biller confirmed the transaction.
pub const BILLER_CONFIRMED: &str = "020";
/// The request arguments were invalid, or the service is not valid.
pub const INVALID_ARGUMENTS: &str = "011";
/// The requested product does not exist.
pub const PRODUCT_DOES_NOT_EXIST: &str = "012";
/// The biller could not be reached.
pub const BILLER_NOT_REACHABLE_AT_THIS_POINT: &str = "030";

/// Classify an envelope code.
///
/// Returns the error kind and the fixed message for the four known codes.
/// Any other code yields [`ErrorKind::Unknown`] and an empty message.
#[must_use]
pub fn classify(code: &str) -> (ErrorKind, &'static str) {
    match code {
        BILLER_CONFIRMED => (ErrorKind::BillerConfirmed, "BILLER CONFIRMED"),
        INVALID_ARGUMENTS => (ErrorKind::InvalidArguments, "INVALID ARGUMENTS"),
        PRODUCT_DOES_NOT_EXIST => (ErrorKind::ProductDoesNotExist, "PRODUCT_DOES_NOT_EXIST"),
        BILLER_NOT_REACHABLE_AT_THIS_POINT => (
            ErrorKind::BillerNotReachable,
            "BILLER NOT REACHABLE AT THIS POINT",
        ),
        _ => (ErrorKind::Unknown, ""),
    }
}

/// A `code` value as it appeared on the wire.
#[derive(Clone, Eq)]
pub struct ResponseCode {
    value: String,
    numeric: bool,
}

impl ResponseCode {
    /// Create a string code.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            numeric: false,
        }
    }

    /// The code as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the code was sent as a JSON number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Classify this code, see [`classify`].
    #[must_use]
    pub fn classify(&self) -> (ErrorKind, &'static str) {
        classify(&self.value)
    }
}

impl PartialEq for ResponseCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<str> for ResponseCode {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for ResponseCode {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl std::hash::Hash for ResponseCode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResponseCode({:?})", self.value)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for ResponseCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.value.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
            if let Ok(n) = self.value.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
        }
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = ResponseCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer response code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ResponseCode::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ResponseCode::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ResponseCode {
                    value: v.to_string(),
                    numeric: true,
                })
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ResponseCode {
                    value: v.to_string(),
                    numeric: true,
                })
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}
