//! Server-issued renewal token.

use std::fmt;

use crate::error::{Error, ResponseField};

/// An opaque renewal credential issued by the sync service.
///
/// Used later to obtain fresh access credentials without re-authenticating.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct ServerToken(String);

impl ServerToken {
    /// Create a new server token, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the token field.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::malformed(ResponseField::Token));
        }
        Ok(Self(token))
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing renewal requests or handing the token to
    /// a credential store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for ServerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServerToken").field(&"[REDACTED]").finish()
    }
}
