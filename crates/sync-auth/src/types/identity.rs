//! Authenticated principal identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ResponseField};

/// The identity of an authenticated principal on the sync service.
///
/// Opaque to this layer: the only invariant is that it is non-empty.
/// Equality is exact string equality.
///
/// # Example
///
/// ```
/// use sync_auth::Identity;
///
/// let identity = Identity::new("5f1d0c7a2b").unwrap();
/// assert_eq!(identity.as_str(), "5f1d0c7a2b");
/// assert!(Identity::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Create a new identity, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the identity field.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.is_empty() {
            return Err(Error::malformed(ResponseField::Identity));
        }
        Ok(Self(s))
    }

    /// Returns the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identity {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
