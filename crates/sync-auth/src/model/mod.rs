//! Credential models built from a login response.
//!
//! Construction is a single validate-then-build step: a model either exists
//! with every field valid, or construction returns an error. No model is
//! ever partially populated or filled with a default value.

mod login_response;
mod renewal_token;

pub use login_response::LoginResponseModel;
pub use renewal_token::RenewalTokenModel;
