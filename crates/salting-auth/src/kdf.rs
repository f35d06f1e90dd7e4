//! PBKDF2-HMAC-SHA512 key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::types::{Cost, KEY_LENGTH};

/// Derive a 128-bit key with `2^cost` iterations of PBKDF2-HMAC-SHA512.
///
/// # Arguments
/// * `password` - Password bytes (not retained)
/// * `salt` - Per-token salt
/// * `cost` - Work factor
///
/// # Returns
/// 16-byte derived key, zeroized on drop
pub fn derive_key(password: &[u8], salt: &[u8], cost: Cost) -> Zeroizing<[u8; KEY_LENGTH]> {
    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2_hmac::<Sha512>(password, salt, cost.iterations(), &mut key[..]);
    key
}
