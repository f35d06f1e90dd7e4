//! Password strength policy.
//!
//! Advisory checks run before hashing. Nothing here affects the token format
//! or verification, so callers can swap in their own policy freely.

pub mod error;
pub mod policy;

pub use error::PolicyViolation;
pub use policy::{validate, PasswordPolicy, DEFAULT_MIN_LENGTH};
