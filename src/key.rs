use std::fmt;

use zeroize::Zeroize;

use crate::crypto::{CryptoProvider, SodiumCompat, KEY_LEN};
use crate::error::{Error, Result};

/// Curve25519 key pair. The secret half is zeroized on drop.
///
/// Built by [`KeyPair::generate`] or [`derive_key_pair`], `public_key` is always the
/// base-point multiple of `secret_key`. [`KeyPair::from_parts`] is the exception:
/// it pairs two independently loaded halves without checking them, and such a
/// pair is only meant to be handed to a single unseal call.
#[derive(Clone)]
pub struct KeyPair {
    public_key: [u8; KEY_LEN],
    secret_key: [u8; KEY_LEN],
}

impl KeyPair {
    /// Fresh key pair from the OS secure random source.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&SodiumCompat)
    }

    pub fn generate_with<P: CryptoProvider>(provider: &P) -> Result<Self> {
        let mut secret_key = [0u8; KEY_LEN];
        provider.fill_random(&mut secret_key)?;
        let pair = derive_key_pair_with(provider, &secret_key);
        secret_key.zeroize();
        Ok(pair)
    }

    /// Combines a secret key and a public key as given, without checking that they belong together.
    pub fn from_parts(secret_key: &[u8; KEY_LEN], public_key: &[u8; KEY_LEN]) -> Self {
        Self {
            public_key: *public_key,
            secret_key: *secret_key,
        }
    }

    pub fn public_key(&self) -> &[u8; KEY_LEN] {
        &self.public_key
    }

    pub fn secret_key(&self) -> &[u8; KEY_LEN] {
        &self.secret_key
    }

    /// True when the public half is the one derived from the secret half.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_with(&SodiumCompat)
    }

    pub fn is_consistent_with<P: CryptoProvider>(&self, provider: &P) -> bool {
        provider.public_from_secret(&self.secret_key) == self.public_key
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Recomputes the public key for `secret_key`. Same input, same output.
pub fn derive_key_pair(secret_key: &[u8; KEY_LEN]) -> KeyPair {
    derive_key_pair_with(&SodiumCompat, secret_key)
}

pub fn derive_key_pair_with<P: CryptoProvider>(provider: &P, secret_key: &[u8; KEY_LEN]) -> KeyPair {
    KeyPair {
        public_key: provider.public_from_secret(secret_key),
        secret_key: *secret_key,
    }
}

/// Checks that a loaded key buffer is exactly one key long.
pub fn key_from_slice(bytes: &[u8]) -> Result<[u8; KEY_LEN]> {
    bytes.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: bytes.len(),
    })
}
