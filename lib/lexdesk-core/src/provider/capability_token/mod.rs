//! Capability tokens scope an unauthenticated holder to a single access link.
//!
//! Format: `base64url(claims JSON) "." base64url(HMAC-SHA256(key, encoded claims))`.

use lexdesk_crypto::utilities::{create_hmac, decode_base64_url, encode_base64_url, verify_hmac};
use secrecy::{ExposeSecret, SecretSlice};
use serde::{Deserialize, Serialize};
use shared_types::AccessLinkId;
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityTokenError {
    #[error("Malformed capability token")]
    Malformed,
    #[error("Invalid capability token signature")]
    InvalidSignature,
    /// Correctly signed, but past its expiry
    #[error("Capability token for link `{0}` expired")]
    Expired(AccessLinkId),
    #[error("Capability token signing failed: `{0}`")]
    Signing(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CapabilityTokenProvider: Send + Sync {
    /// Issues a token for `link_id`, valid until `expires_at`
    fn issue(
        &self,
        link_id: AccessLinkId,
        expires_at: OffsetDateTime,
    ) -> Result<String, CapabilityTokenError>;

    /// Checks signature and expiry, returns the link the token is scoped to
    fn validate(
        &self,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<AccessLinkId, CapabilityTokenError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    link_id: AccessLinkId,
    exp: i64,
}

pub struct HmacCapabilityTokenProvider {
    key: SecretSlice<u8>,
}

impl HmacCapabilityTokenProvider {
    pub fn new(key: SecretSlice<u8>) -> Self {
        Self { key }
    }
}

impl CapabilityTokenProvider for HmacCapabilityTokenProvider {
    fn issue(
        &self,
        link_id: AccessLinkId,
        expires_at: OffsetDateTime,
    ) -> Result<String, CapabilityTokenError> {
        let claims = serde_json::to_vec(&Claims {
            link_id,
            exp: expires_at.unix_timestamp(),
        })
        .map_err(|err| CapabilityTokenError::Signing(err.to_string()))?;

        let claims = encode_base64_url(&claims)
            .map_err(|err| CapabilityTokenError::Signing(err.to_string()))?;
        let signature = create_hmac(self.key.expose_secret(), claims.as_bytes())
            .map_err(|err| CapabilityTokenError::Signing(err.to_string()))?;
        let signature = encode_base64_url(&signature)
            .map_err(|err| CapabilityTokenError::Signing(err.to_string()))?;

        Ok(format!("{claims}.{signature}"))
    }

    fn validate(
        &self,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<AccessLinkId, CapabilityTokenError> {
        let (claims, signature) = token
            .split_once('.')
            .ok_or(CapabilityTokenError::Malformed)?;
        let signature =
            decode_base64_url(signature).map_err(|_| CapabilityTokenError::Malformed)?;

        let valid = verify_hmac(self.key.expose_secret(), claims.as_bytes(), &signature)
            .map_err(|err| CapabilityTokenError::Signing(err.to_string()))?;
        if !valid {
            return Err(CapabilityTokenError::InvalidSignature);
        }

        let claims = decode_base64_url(claims).map_err(|_| CapabilityTokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&claims).map_err(|_| CapabilityTokenError::Malformed)?;

        if now.unix_timestamp() >= claims.exp {
            return Err(CapabilityTokenError::Expired(claims.link_id));
        }

        Ok(claims.link_id)
    }
}
