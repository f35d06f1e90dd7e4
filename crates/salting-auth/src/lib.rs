//! Password authentication: salted PBKDF2-HMAC-SHA512 tokens with
//! constant-time verification.

pub mod authenticator;
pub mod base64url;
pub mod compare;
pub mod config;
pub mod error;
pub mod kdf;
pub mod random;
pub mod token;
pub mod types;

pub use authenticator::Authenticator;
pub use base64url::{base64url_decode_into, base64url_encode};
pub use compare::keys_match;
pub use config::AuthenticatorConfig;
pub use error::AuthError;
pub use kdf::derive_key;
pub use random::{OsSaltSource, SaltSource, SeededSaltSource};
pub use token::Token;
pub use types::{
    Cost, DEFAULT_COST, ENCODED_PAYLOAD_LENGTH, KEY_LENGTH, MAX_COST, PAYLOAD_LENGTH, SALT_LENGTH,
    SCHEME_ID, TOKEN_PREFIX,
};
