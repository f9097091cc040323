//! Slow one-way hashing of short secrets (PINs) using PBKDF2-HMAC-SHA256.
//!
//! Hashes are stored in the PHC string format, so the iteration count and salt travel with the
//! hash and old hashes stay verifiable after the configured rounds change.

use pbkdf2::Pbkdf2;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use secrecy::{ExposeSecret, SecretString};

use crate::CryptoError;
use crate::utilities::generate_random_bytes;

pub const MIN_ROUNDS: u32 = 1_000;

const OUTPUT_LENGTH: usize = 32;

pub fn hash_secret(secret: &SecretString, rounds: u32) -> Result<String, CryptoError> {
    let salt = SaltString::encode_b64(&generate_random_bytes::<16>())
        .map_err(|err| CryptoError::PasswordHash(err.to_string()))?;

    let params = pbkdf2::Params {
        rounds: rounds.max(MIN_ROUNDS),
        output_length: OUTPUT_LENGTH,
    };

    let hash = Pbkdf2
        .hash_password_customized(
            secret.expose_secret().as_bytes(),
            None,
            None,
            params,
            &salt,
        )
        .map_err(|err| CryptoError::PasswordHash(err.to_string()))?;

    Ok(hash.to_string())
}

/// Constant-time comparison of `secret` against a stored PHC hash
pub fn verify_secret(secret: &SecretString, hash: &str) -> Result<bool, CryptoError> {
    let parsed =
        PasswordHash::new(hash).map_err(|err| CryptoError::MalformedHash(err.to_string()))?;

    Ok(Pbkdf2
        .verify_password(secret.expose_secret().as_bytes(), &parsed)
        .is_ok())
}
