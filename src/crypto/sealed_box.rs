//! Sealed-box encryption to a recipient public key.
//!
//! `seal()` needs only the recipient's public key and leaves no trace of the sender.
//! `unseal()` needs a full key pair and either returns the exact plaintext or
//! `AuthenticationFailure`, never a partial result.

use tracing::debug;

use super::{CryptoProvider, SodiumCompat, KEY_LEN, MAX_PLAINTEXT_LEN};
use crate::error::{Error, Result};
use crate::key::KeyPair;

#[derive(Debug, Clone, Default)]
pub struct SealedBoxCipher<P = SodiumCompat> {
    provider: P,
}

impl SealedBoxCipher<SodiumCompat> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CryptoProvider> SealedBoxCipher<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Output is `plaintext.len() + SEAL_OVERHEAD` bytes, fresh ephemeral key every call.
    pub fn seal(&self, plaintext: &[u8], recipient_public_key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
        if plaintext.len() > MAX_PLAINTEXT_LEN {
            return Err(Error::MessageTooLarge {
                len: plaintext.len(),
                max: MAX_PLAINTEXT_LEN,
            });
        }

        let sealed = self.provider.seal(plaintext, recipient_public_key)?;
        debug!(plaintext_len = plaintext.len(), sealed_len = sealed.len(), "sealed message");
        Ok(sealed)
    }

    pub fn unseal(&self, message: &[u8], key_pair: &KeyPair) -> Result<Vec<u8>> {
        let plaintext = self
            .provider
            .unseal(message, key_pair.public_key(), key_pair.secret_key())
            .inspect_err(|_| debug!(len = message.len(), "sealed message failed authentication"))?;
        debug!(sealed_len = message.len(), plaintext_len = plaintext.len(), "unsealed message");
        Ok(plaintext)
    }
}

/// [`SealedBoxCipher::seal`] with the default provider.
pub fn seal(plaintext: &[u8], recipient_public_key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
    SealedBoxCipher::new().seal(plaintext, recipient_public_key)
}

/// [`SealedBoxCipher::unseal`] with the default provider.
pub fn unseal(message: &[u8], key_pair: &KeyPair) -> Result<Vec<u8>> {
    SealedBoxCipher::new().unseal(message, key_pair)
}
