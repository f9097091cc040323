use ct_codecs::{Base64, Base64UrlSafeNoPadding, Decoder, Encoder};
use hmac::Mac;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{CryptoError, HmacSha256};

/// Generates a human-typable numeric code (PIN/OTP) of `length` digits
pub fn generate_numeric(length: usize) -> String {
    let rng = &mut get_rng();
    std::iter::repeat_with(|| rng.gen_range('0'..='9'))
        .take(length)
        .collect()
}

pub fn generate_random_bytes<const N: usize>() -> [u8; N] {
    let mut res = [0u8; N];
    get_rng().fill_bytes(&mut res);
    res
}

pub fn get_rng() -> impl RngCore + CryptoRng {
    ChaCha20Rng::from_entropy()
}

pub fn create_hmac(key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Checks `tag` against the HMAC-SHA256 of `message` in constant time
pub fn verify_hmac(key: &[u8], message: &[u8], tag: &[u8]) -> Result<bool, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength)?;
    mac.update(message);
    Ok(mac.verify_slice(tag).is_ok())
}

pub fn encode_base64_url(data: &[u8]) -> Result<String, CryptoError> {
    Base64UrlSafeNoPadding::encode_to_string(data)
        .map_err(|err| CryptoError::Encoding(err.to_string()))
}

pub fn encode_base64(data: &[u8]) -> Result<String, CryptoError> {
    Base64::encode_to_string(data).map_err(|err| CryptoError::Encoding(err.to_string()))
}

pub fn decode_base64_url(data: &str) -> Result<Vec<u8>, CryptoError> {
    Base64UrlSafeNoPadding::decode_to_vec(data, None)
        .map_err(|err| CryptoError::Encoding(err.to_string()))
}
