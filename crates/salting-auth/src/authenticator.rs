//! Password hashing and verification.
//!
//! Hashing and verification are CPU-bound and scale with `2^cost`. Async
//! callers should run them on a blocking pool rather than inline.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::compare::keys_match;
use crate::config::AuthenticatorConfig;
use crate::error::AuthError;
use crate::kdf::derive_key;
use crate::random::{OsSaltSource, SaltSource};
use crate::token::Token;
use crate::types::{Cost, SALT_LENGTH};

/// Hashes passwords into tokens and verifies passwords against tokens.
///
/// Holds no per-password state, so one instance can be shared across
/// threads. The salt source is the only shared resource.
pub struct Authenticator {
    cost: Cost,
    salt_source: Arc<dyn SaltSource>,
}

impl Authenticator {
    /// Create an authenticator backed by the operating-system RNG.
    ///
    /// Fails with `InvalidParameter` unless `0 <= cost <= 30`.
    pub fn new(cost: i64) -> Result<Self, AuthError> {
        Self::with_salt_source(cost, Arc::new(OsSaltSource))
    }

    /// Create an authenticator with the default cost (16).
    pub fn with_default_cost() -> Self {
        Self::from_parts(Cost::DEFAULT, Arc::new(OsSaltSource))
    }

    /// Create an authenticator drawing salts from `salt_source`.
    pub fn with_salt_source(
        cost: i64,
        salt_source: Arc<dyn SaltSource>,
    ) -> Result<Self, AuthError> {
        let cost = Cost::new(cost)?;
        Ok(Self::from_parts(cost, salt_source))
    }

    pub fn from_config(config: &AuthenticatorConfig) -> Result<Self, AuthError> {
        Self::new(config.cost)
    }

    fn from_parts(cost: Cost, salt_source: Arc<dyn SaltSource>) -> Self {
        debug!(cost = cost.get(), iterations = cost.iterations(), "authenticator ready");
        Self { cost, salt_source }
    }

    /// Cost applied to newly issued tokens.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Hash a password into a token for storage.
    ///
    /// Every call draws a fresh salt, so hashing the same password twice
    /// yields different tokens. The password is not retained; callers should
    /// clear their buffer afterwards.
    pub fn hash(&self, password: &[u8]) -> Result<String, AuthError> {
        let mut salt = [0u8; SALT_LENGTH];
        self.salt_source.fill_salt(&mut salt)?;
        let key = derive_key(password, &salt, self.cost);
        debug!(cost = self.cost.get(), "issued password token");
        Ok(Token::new(self.cost, salt, key).encode())
    }

    /// Check a password against a previously issued token.
    ///
    /// The token's embedded cost is used, not this instance's. A token that
    /// cannot be parsed is an error, never `false`.
    pub fn authenticate(&self, password: &[u8], token: &str) -> Result<bool, AuthError> {
        let token = parse_token(token)?;
        let candidate = derive_key(password, token.salt(), token.cost());
        Ok(keys_match(token.key(), &candidate))
    }

    /// Whether a token was issued with a cost other than this instance's.
    ///
    /// Lets callers re-hash on the next successful login after the cost
    /// setting changes.
    pub fn needs_rehash(&self, token: &str) -> Result<bool, AuthError> {
        let token = parse_token(token)?;
        let stale = token.cost() != self.cost;
        if stale {
            debug!(
                token_cost = token.cost().get(),
                current_cost = self.cost.get(),
                "token cost differs from configured cost"
            );
        }
        Ok(stale)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::with_default_cost()
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

// Token text embeds the salt and derived key; only the reason is logged.
fn parse_token(token: &str) -> Result<Token, AuthError> {
    Token::parse(token).inspect_err(|e| warn!(error = %e, "rejected password token"))
}
