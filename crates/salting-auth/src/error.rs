use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid cost: {cost} (must be between 0 and {max})", max = crate::types::MAX_COST)]
    InvalidParameter { cost: i64 },

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Crypto primitive unavailable: {0}")]
    CryptoUnavailable(String),
}
