use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_COST;

/// Authenticator settings as loaded from the host application's config.
///
/// The cost is kept signed so out-of-range values reach validation and fail
/// with `InvalidParameter` instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticatorConfig {
    /// Work factor; PBKDF2 runs `2^cost` iterations.
    pub cost: i64,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            cost: i64::from(DEFAULT_COST),
        }
    }
}
