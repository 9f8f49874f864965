//! Credential value types.
//!
//! These types enforce their invariants at construction time, so a value
//! that exists is a value that passed validation.

mod identity;
mod server_token;
mod token_expiry;

pub use identity::Identity;
pub use server_token::ServerToken;
pub use token_expiry::TokenExpiry;
