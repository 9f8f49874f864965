//! Key names of the login response protocol.

use serde::{Deserialize, Serialize};

/// The field names a login response is read with.
///
/// The default matches the sync service's login endpoint:
///
/// ```json
/// {
///   "identity": "...",
///   "refresh_token": { "token": "...", "expires": 1700000000.0 },
///   "access": ["..."]
/// }
/// ```
///
/// Only the key names can be changed; every field stays required and is
/// validated the same way. Keys listed in `ignored_keys` are recognized but
/// not modeled. Any other unknown key is tolerated too.
///
/// # Example
///
/// ```
/// use sync_auth::ResponseSchema;
///
/// let schema: ResponseSchema = serde_json::from_str(r#"{ "expires_key": "expires_at" }"#).unwrap();
/// assert_eq!(schema.expires_key, "expires_at");
/// assert_eq!(schema.identity_key, "identity");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseSchema {
    /// Top-level key holding the principal's identity.
    pub identity_key: String,
    /// Top-level key holding the nested renewal token object.
    pub refresh_token_key: String,
    /// Key of the token string inside the renewal token object.
    pub token_key: String,
    /// Key of the expiry inside the renewal token object.
    pub expires_key: String,
    /// Top-level keys that are part of the protocol but deliberately not modeled.
    pub ignored_keys: Vec<String>,
}

impl ResponseSchema {
    /// Returns true if `key` is read or explicitly ignored at the top level.
    pub fn recognizes(&self, key: &str) -> bool {
        key == self.identity_key
            || key == self.refresh_token_key
            || self.ignored_keys.iter().any(|k| k == key)
    }
}

impl Default for ResponseSchema {
    fn default() -> Self {
        Self {
            identity_key: "identity".to_string(),
            refresh_token_key: "refresh_token".to_string(),
            token_key: "token".to_string(),
            expires_key: "expires".to_string(),
            ignored_keys: vec!["access".to_string()],
        }
    }
}
