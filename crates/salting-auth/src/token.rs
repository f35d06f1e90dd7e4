//! Self-describing password token codec.
//!
//! Format: `$0001$<cost>$<payload>`
//! - cost: one or two decimal digits, 0-30
//! - payload: base64url without padding of `[salt:16][derived key:16]`, 43 chars
//!
//! The cost field width is tied to `MAX_COST`; raising the bound past 99
//! means changing the layout too.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use zeroize::Zeroizing;

use crate::base64url::{base64url_decode_into, base64url_encode};
use crate::error::AuthError;
use crate::types::{Cost, KEY_LENGTH, PAYLOAD_LENGTH, SALT_LENGTH, TOKEN_PREFIX};

static TOKEN_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$0001\$([0-9]{1,2})\$([A-Za-z0-9_-]{43})$")
        .expect("token layout is a valid pattern")
});

/// A parsed token: the cost it was issued with, its salt and the derived key.
pub struct Token {
    cost: Cost,
    salt: [u8; SALT_LENGTH],
    key: Zeroizing<[u8; KEY_LENGTH]>,
}

impl Token {
    pub fn new(cost: Cost, salt: [u8; SALT_LENGTH], key: Zeroizing<[u8; KEY_LENGTH]>) -> Self {
        Self { cost, salt, key }
    }

    /// Parse a token string. Any deviation from the fixed layout, an
    /// out-of-range cost or an undecodable payload is `MalformedToken`.
    pub fn parse(token: &str) -> Result<Self, AuthError> {
        let caps = TOKEN_LAYOUT
            .captures(token)
            .ok_or_else(|| AuthError::MalformedToken("does not match token layout".into()))?;

        let raw_cost: i64 = caps[1]
            .parse()
            .map_err(|_| AuthError::MalformedToken("cost is not a number".into()))?;
        let cost = Cost::new(raw_cost)
            .map_err(|_| AuthError::MalformedToken(format!("cost {} out of range", raw_cost)))?;

        let mut payload = Zeroizing::new([0u8; PAYLOAD_LENGTH]);
        let decoded = base64url_decode_into(&caps[2], &mut payload[..])
            .map_err(|e| AuthError::MalformedToken(format!("invalid payload encoding: {}", e)))?;
        if decoded.len() != PAYLOAD_LENGTH {
            return Err(AuthError::MalformedToken(format!(
                "payload must be {} bytes, got {}",
                PAYLOAD_LENGTH,
                decoded.len()
            )));
        }

        let mut salt = [0u8; SALT_LENGTH];
        salt.copy_from_slice(&payload[..SALT_LENGTH]);
        let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
        key.copy_from_slice(&payload[SALT_LENGTH..]);

        Ok(Self { cost, salt, key })
    }

    /// Encode as `$0001$<cost>$<base64url(salt || key)>`.
    pub fn encode(&self) -> String {
        let mut payload = Zeroizing::new([0u8; PAYLOAD_LENGTH]);
        payload[..SALT_LENGTH].copy_from_slice(&self.salt);
        payload[SALT_LENGTH..].copy_from_slice(&self.key[..]);
        format!("{}{}${}", TOKEN_PREFIX, self.cost, base64url_encode(&payload[..]))
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub(crate) fn key(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl FromStr for Token {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("cost", &self.cost)
            .field("salt", &"<redacted>")
            .field("key", &"<redacted>")
            .finish()
    }
}
