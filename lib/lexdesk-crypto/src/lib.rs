#![cfg_attr(feature = "strict", deny(warnings))]

use hmac::Hmac;
use sha2::Sha256;
use thiserror::Error;

pub mod password;
pub mod utilities;

pub(crate) type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key length")]
    InvalidKeyLength,
    #[error("Password hashing failed: `{0}`")]
    PasswordHash(String),
    #[error("Malformed password hash: `{0}`")]
    MalformedHash(String),
    #[error("Encoding error: `{0}`")]
    Encoding(String),
}
