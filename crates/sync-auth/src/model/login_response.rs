//! Login response model.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, instrument};

use super::RenewalTokenModel;
use crate::error::{Error, ResponseField};
use crate::response::ResponseMap;
use crate::schema::ResponseSchema;
use crate::types::Identity;

/// A validated response to a login or refresh request.
///
/// Owns its [`RenewalTokenModel`] by value. The model is immutable: the
/// session layer reads it, copies what it needs into its own store, and
/// drops it.
///
/// The protocol's `access` field and any other unknown top-level fields are
/// accepted and ignored.
///
/// # Example
///
/// ```
/// use sync_auth::LoginResponseModel;
///
/// let body = r#"{
///     "identity": "u1",
///     "refresh_token": { "token": "abc", "expires": 1700000000.0 },
///     "access": ["download", "upload"]
/// }"#;
///
/// let model = LoginResponseModel::from_json_str(body).unwrap();
/// assert_eq!(model.identity().as_str(), "u1");
/// assert_eq!(model.renewal_token_model().renewal_token().as_str(), "abc");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LoginResponseModel {
    identity: Identity,
    renewal_token_model: RenewalTokenModel,
}

impl LoginResponseModel {
    /// Build the model from a decoded response using the default key names.
    ///
    /// # Errors
    ///
    /// See [`LoginResponseModel::from_map`].
    pub fn new(map: &dyn ResponseMap) -> Result<Self, Error> {
        Self::from_map(map, &ResponseSchema::default())
    }

    /// Build the model from a decoded response using the key names in `schema`.
    ///
    /// Fields are checked in order and the first failure wins:
    ///
    /// 1. the identity must be a non-empty string
    /// 2. the renewal token field must be a nested mapping
    /// 3. the nested mapping must form a valid [`RenewalTokenModel`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the first invalid field.
    /// Errors from the nested model are returned unchanged.
    #[instrument(level = "debug", skip_all)]
    pub fn from_map(map: &dyn ResponseMap, schema: &ResponseSchema) -> Result<Self, Error> {
        let result = Self::validate(map, schema);

        match &result {
            Ok(model) => {
                for key in map.keys().filter(|key| !schema.recognizes(key)) {
                    debug!(%key, "Ignoring unrecognized login response field");
                }
                debug!(identity = %model.identity, "Login response validated");
            }
            Err(err) => debug!(error = %err, "Rejected login response"),
        }

        result
    }

    fn validate(map: &dyn ResponseMap, schema: &ResponseSchema) -> Result<Self, Error> {
        let identity = map
            .field(&schema.identity_key)
            .as_str()
            .ok_or_else(|| Error::malformed(ResponseField::Identity))
            .and_then(Identity::new)?;

        let nested = map
            .field(&schema.refresh_token_key)
            .as_map()
            .ok_or_else(|| Error::malformed(ResponseField::RefreshToken))?;

        let renewal_token_model = RenewalTokenModel::from_map(nested, schema)?;

        Ok(Self {
            identity,
            renewal_token_model,
        })
    }

    /// Build the model from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the envelope if the value
    /// is not a JSON object, or the first invalid field otherwise.
    pub fn from_json_value(value: &Value) -> Result<Self, Error> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::malformed(ResponseField::Envelope))?;
        Self::new(map)
    }

    /// Decode a raw response body and build the model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not valid JSON, otherwise as
    /// [`LoginResponseModel::from_json_value`].
    pub fn from_json_slice(body: &[u8]) -> Result<Self, Error> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_json_value(&value)
    }

    /// Decode a response body string and build the model.
    ///
    /// # Errors
    ///
    /// See [`LoginResponseModel::from_json_slice`].
    pub fn from_json_str(body: &str) -> Result<Self, Error> {
        Self::from_json_slice(body.as_bytes())
    }

    /// Returns the authenticated principal's identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the renewal token issued with this response.
    pub fn renewal_token_model(&self) -> &RenewalTokenModel {
        &self.renewal_token_model
    }

    /// Consume the model, returning its parts.
    pub fn into_parts(self) -> (Identity, RenewalTokenModel) {
        (self.identity, self.renewal_token_model)
    }
}

impl FromStr for LoginResponseModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

impl<'de> Deserialize<'de> for LoginResponseModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LoginResponseModel::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}
