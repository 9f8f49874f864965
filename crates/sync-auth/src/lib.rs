//! sync-auth - Login response validation and credential models.
//!
//! This crate turns the untrusted body of a login or refresh response into
//! immutable, strongly typed credential models. A model either exists with
//! every field valid, or construction fails with an error naming the first
//! invalid field.
//!
//! # Example
//!
//! ```
//! use sync_auth::{Error, LoginResponseModel, ResponseField};
//!
//! let body = br#"{"identity":"u1","refresh_token":{"token":"abc","expires":1700000000.0}}"#;
//! let model = LoginResponseModel::from_json_slice(body)?;
//!
//! let renewal = model.renewal_token_model();
//! assert_eq!(model.identity().as_str(), "u1");
//! assert_eq!(renewal.token_expiry().as_secs_f64(), 1700000000.0);
//!
//! let err = LoginResponseModel::from_json_str(r#"{"refresh_token":{}}"#).unwrap_err();
//! assert_eq!(err.malformed_field(), Some(ResponseField::Identity));
//! # Ok::<(), Error>(())
//! ```

pub mod error;
pub mod model;
pub mod response;
pub mod schema;
pub mod types;

pub use error::{Error, ResponseField};
pub use model::{LoginResponseModel, RenewalTokenModel};
pub use response::{FieldValue, ResponseMap};
pub use schema::ResponseSchema;
pub use types::{Identity, ServerToken, TokenExpiry};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
