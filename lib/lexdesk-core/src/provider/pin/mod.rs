use lexdesk_crypto::CryptoError;
use lexdesk_crypto::password::{hash_secret, verify_secret};
use lexdesk_crypto::utilities::generate_numeric;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinError {
    #[error("Crypto error: `{0}`")]
    Crypto(#[from] CryptoError),
    #[error("Hashing task failed: `{0}`")]
    Task(#[from] tokio::task::JoinError),
}

/// Generates access-link PINs and handles their one-way hashes
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PinProvider: Send + Sync {
    fn generate(&self) -> SecretString;

    async fn hash(&self, pin: &SecretString) -> Result<String, PinError>;

    async fn verify(&self, pin: &SecretString, hash: &str) -> Result<bool, PinError>;
}

pub struct Pbkdf2PinProvider {
    length: usize,
    rounds: u32,
}

impl Pbkdf2PinProvider {
    pub fn new(length: usize, rounds: u32) -> Self {
        Self { length, rounds }
    }
}

#[async_trait::async_trait]
impl PinProvider for Pbkdf2PinProvider {
    fn generate(&self) -> SecretString {
        SecretString::from(generate_numeric(self.length))
    }

    async fn hash(&self, pin: &SecretString) -> Result<String, PinError> {
        let pin = SecretString::from(pin.expose_secret().to_owned());
        let rounds = self.rounds;

        Ok(tokio::task::spawn_blocking(move || hash_secret(&pin, rounds)).await??)
    }

    async fn verify(&self, pin: &SecretString, hash: &str) -> Result<bool, PinError> {
        let pin = SecretString::from(pin.expose_secret().to_owned());
        let hash = hash.to_owned();

        Ok(tokio::task::spawn_blocking(move || verify_secret(&pin, &hash)).await??)
    }
}
