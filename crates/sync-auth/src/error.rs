//! Error types for the sync-auth library.
//!
//! Validation of a login response has exactly one failure mode,
//! [`Error::MalformedResponse`], which names the offending field. Decoding
//! the raw body into JSON is reported separately as [`Error::Decode`].

use std::fmt;
use thiserror::Error;

/// The unified error type for sync-auth operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing, null, or of the wrong type or shape.
    #[error("malformed response: missing or invalid field '{field}'")]
    MalformedResponse { field: ResponseField },

    /// The response body could not be decoded as JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(field: ResponseField) -> Self {
        Error::MalformedResponse { field }
    }

    /// Check if this is a field validation failure.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }

    /// Returns the field that failed validation, if any.
    pub fn malformed_field(&self) -> Option<ResponseField> {
        match self {
            Error::MalformedResponse { field } => Some(*field),
            Error::Decode(_) => None,
        }
    }
}

/// The field of a login response that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseField {
    /// The response body itself was not a JSON object.
    Envelope,
    /// The principal's identity.
    Identity,
    /// The nested renewal token object.
    RefreshToken,
    /// The renewal token string.
    Token,
    /// The renewal token's expiry.
    Expiry,
}

impl ResponseField {
    /// Returns the field name as reported in errors and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseField::Envelope => "envelope",
            ResponseField::Identity => "identity",
            ResponseField::RefreshToken => "refresh_token",
            ResponseField::Token => "token",
            ResponseField::Expiry => "expiry",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
