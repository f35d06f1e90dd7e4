use std::fmt;

use crate::error::AuthError;

/// Token scheme identifier.
///
/// Token format: `$0001$<cost>$<base64url(salt || key)>`
pub const SCHEME_ID: &str = "0001";

/// Leading text shared by every token of this scheme.
pub const TOKEN_PREFIX: &str = "$0001$";

/// Salt length in bytes (128 bits).
pub const SALT_LENGTH: usize = 16;

/// Derived key length in bytes (128 bits).
pub const KEY_LENGTH: usize = 16;

/// Decoded payload length: salt followed by derived key.
pub const PAYLOAD_LENGTH: usize = SALT_LENGTH + KEY_LENGTH;

/// Unpadded base64url length of a 32-byte payload.
pub const ENCODED_PAYLOAD_LENGTH: usize = 43;

/// Cost used when none is configured (65536 iterations).
pub const DEFAULT_COST: u32 = 16;

/// Largest accepted cost. Tokens encode the cost in at most two decimal digits.
pub const MAX_COST: u32 = 30;

/// Validated work factor. Each unit doubles the number of PBKDF2 iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    pub const DEFAULT: Cost = Cost(DEFAULT_COST);

    /// Validate a cost by computing its iteration count.
    pub fn new(cost: i64) -> Result<Self, AuthError> {
        match iterations(cost) {
            Some(_) => Ok(Self(cost as u32)),
            None => Err(AuthError::InvalidParameter { cost }),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// PBKDF2 iteration count, `2^cost`.
    pub fn iterations(self) -> u32 {
        1 << self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `1 << cost`, or `None` when the cost is outside `0..=MAX_COST`.
fn iterations(cost: i64) -> Option<u32> {
    if !(0..=i64::from(MAX_COST)).contains(&cost) {
        return None;
    }
    1u32.checked_shl(cost as u32)
}
