//! Salt sources.
//!
//! An [`Authenticator`](crate::Authenticator) draws every salt from one
//! injected [`SaltSource`]. Production code uses [`OsSaltSource`]; tests can
//! inject [`SeededSaltSource`] for reproducible tokens.

use parking_lot::Mutex;
use sha2::{Digest, Sha512};

use crate::error::AuthError;

/// Capability for drawing salt bytes. Shared by all calls on an
/// authenticator, so implementations must be safe for concurrent use.
pub trait SaltSource: Send + Sync {
    fn fill_salt(&self, salt: &mut [u8]) -> Result<(), AuthError>;
}

/// Operating-system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn fill_salt(&self, salt: &mut [u8]) -> Result<(), AuthError> {
        getrandom::getrandom(salt)
            .map_err(|e| AuthError::CryptoUnavailable(format!("random source failed: {}", e)))
    }
}

/// Deterministic salt stream for tests. NOT suitable for production.
///
/// Block `n` is `SHA-512(seed_le || n_le)`, truncated to the requested length.
/// Each call consumes one block, so successive salts differ while two
/// sources built from the same seed produce identical sequences.
#[derive(Debug)]
pub struct SeededSaltSource {
    seed: u64,
    counter: Mutex<u64>,
}

impl SeededSaltSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            counter: Mutex::new(0),
        }
    }
}

impl SaltSource for SeededSaltSource {
    fn fill_salt(&self, salt: &mut [u8]) -> Result<(), AuthError> {
        let block = {
            let mut counter = self.counter.lock();
            let n = *counter;
            *counter += 1;
            n
        };
        let digest = Sha512::new()
            .chain_update(self.seed.to_le_bytes())
            .chain_update(block.to_le_bytes())
            .finalize();
        if salt.len() > digest.len() {
            return Err(AuthError::CryptoUnavailable(format!(
                "seeded source yields at most {} bytes per salt, requested {}",
                digest.len(),
                salt.len()
            )));
        }
        salt.copy_from_slice(&digest[..salt.len()]);
        Ok(())
    }
}
