//! Renewal token model.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, ResponseField};
use crate::response::ResponseMap;
use crate::schema::ResponseSchema;
use crate::types::{ServerToken, TokenExpiry};

/// A validated renewal token and the instant it expires.
///
/// Built from the nested `refresh_token` object of a login response.
/// Both fields are private and read-only once constructed.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sync_auth::RenewalTokenModel;
///
/// let json = json!({ "token": "abc", "expires": 1700000000.0 });
/// let model = RenewalTokenModel::new(json.as_object().unwrap()).unwrap();
///
/// assert_eq!(model.renewal_token().as_str(), "abc");
/// assert_eq!(model.token_expiry().as_secs_f64(), 1700000000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenewalTokenModel {
    renewal_token: ServerToken,
    token_expiry: TokenExpiry,
}

impl RenewalTokenModel {
    /// Build the model from a mapping using the default key names.
    ///
    /// # Errors
    ///
    /// See [`RenewalTokenModel::from_map`].
    pub fn new(map: &dyn ResponseMap) -> Result<Self, Error> {
        Self::from_map(map, &ResponseSchema::default())
    }

    /// Build the model from a mapping using the key names in `schema`.
    ///
    /// Fields are checked in order and the first failure wins:
    ///
    /// 1. the token must be a non-empty string
    /// 2. the expiry must be a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming `token` or `expiry`.
    pub fn from_map(map: &dyn ResponseMap, schema: &ResponseSchema) -> Result<Self, Error> {
        let renewal_token = map
            .field(&schema.token_key)
            .as_str()
            .ok_or_else(|| Error::malformed(ResponseField::Token))
            .and_then(ServerToken::new)?;

        let token_expiry = map
            .field(&schema.expires_key)
            .as_f64()
            .ok_or_else(|| Error::malformed(ResponseField::Expiry))
            .and_then(TokenExpiry::new)?;

        Ok(Self {
            renewal_token,
            token_expiry,
        })
    }

    /// Create the model from already-validated parts.
    pub fn from_parts(renewal_token: ServerToken, token_expiry: TokenExpiry) -> Self {
        Self {
            renewal_token,
            token_expiry,
        }
    }

    /// Returns the token used to obtain fresh access credentials.
    pub fn renewal_token(&self) -> &ServerToken {
        &self.renewal_token
    }

    /// Returns the instant after which the token must not be used.
    pub fn token_expiry(&self) -> TokenExpiry {
        self.token_expiry
    }

    /// Consume the model, returning its parts.
    pub fn into_parts(self) -> (ServerToken, TokenExpiry) {
        (self.renewal_token, self.token_expiry)
    }
}

impl<'de> Deserialize<'de> for RenewalTokenModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let model = match value.as_object() {
            Some(map) => RenewalTokenModel::new(map),
            None => Err(Error::malformed(ResponseField::RefreshToken)),
        };
        model.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn build(value: Value) -> Result<RenewalTokenModel, Error> {
        let map: Map<String, Value> = serde_json::from_value(value).unwrap();
        RenewalTokenModel::new(&map)
    }

    fn rejected_field(value: Value) -> Option<ResponseField> {
        build(value).unwrap_err().malformed_field()
    }

    #[test]
    fn test_valid_token() {
        let model = build(json!({ "token": "abc", "expires": 1700000000.0 })).unwrap();
        assert_eq!(model.renewal_token().as_str(), "abc");
        assert_eq!(model.token_expiry().as_secs_f64(), 1700000000.0);
    }

    #[test]
    fn test_integer_expiry_accepted() {
        let model = build(json!({ "token": "abc", "expires": 5 })).unwrap();
        assert_eq!(model.token_expiry().as_secs_f64(), 5.0);
    }

    #[test]
    fn test_zero_expiry_accepted() {
        let model = build(json!({ "token": "abc", "expires": 0 })).unwrap();
        assert_eq!(model.token_expiry().as_secs_f64(), 0.0);
        assert!(model.token_expiry().is_expired());
    }

    #[test]
    fn test_token_rejections() {
        let token = Some(ResponseField::Token);
        assert_eq!(rejected_field(json!({ "expires": 5 })), token);
        assert_eq!(rejected_field(json!({ "token": null, "expires": 5 })), token);
        assert_eq!(rejected_field(json!({ "token": "", "expires": 5 })), token);
        assert_eq!(rejected_field(json!({ "token": 42, "expires": 5 })), token);
        assert_eq!(rejected_field(json!({ "token": ["abc"], "expires": 5 })), token);
        assert_eq!(rejected_field(json!({ "token": { "v": "abc" }, "expires": 5 })), token);
    }

    #[test]
    fn test_expiry_rejections() {
        let expiry = Some(ResponseField::Expiry);
        assert_eq!(rejected_field(json!({ "token": "abc" })), expiry);
        assert_eq!(rejected_field(json!({ "token": "abc", "expires": null })), expiry);
        assert_eq!(rejected_field(json!({ "token": "abc", "expires": -1 })), expiry);
        assert_eq!(rejected_field(json!({ "token": "abc", "expires": "5" })), expiry);
        assert_eq!(rejected_field(json!({ "token": "abc", "expires": true })), expiry);
    }

    #[test]
    fn test_token_checked_before_expiry() {
        assert_eq!(rejected_field(json!({})), Some(ResponseField::Token));
        assert_eq!(
            rejected_field(json!({ "token": "", "expires": -1 })),
            Some(ResponseField::Token)
        );
    }

    #[test]
    fn test_custom_key_names() {
        let schema = ResponseSchema {
            token_key: "value".to_string(),
            expires_key: "expires_at".to_string(),
            ..ResponseSchema::default()
        };
        let map: Map<String, Value> =
            serde_json::from_value(json!({ "value": "abc", "expires_at": 10 })).unwrap();
        let model = RenewalTokenModel::from_map(&map, &schema).unwrap();
        assert_eq!(model.renewal_token().as_str(), "abc");

        let default_keys = RenewalTokenModel::new(&map).unwrap_err();
        assert_eq!(default_keys.malformed_field(), Some(ResponseField::Token));
    }

    #[test]
    fn test_deserialize() {
        let model: RenewalTokenModel =
            serde_json::from_str(r#"{"token": "abc", "expires": 12.5}"#).unwrap();
        assert_eq!(model.token_expiry().as_secs_f64(), 12.5);

        assert!(serde_json::from_str::<RenewalTokenModel>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<RenewalTokenModel>(r#"{"token": ""}"#).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let model = build(json!({ "token": "super-secret", "expires": 1 })).unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
